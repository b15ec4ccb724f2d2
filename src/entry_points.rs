/* ************************************************************************ **
** This file is part of colmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::check::{self, Sampler};
use crate::ui::logging::GlobalLogger;

use clap::{App, Arg, ArgMatches};
use std::ffi::OsStr;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        std::process::exit(1);
    });
}

fn check_app<'a, 'b>() -> App<'a, 'b> {
    App::new("colmat-check")
        .version(crate_version!())
        .about("Checks the algebraic laws of the 3x4 matrix type on random inputs.")
        .args(&[
            Arg::with_name("trials")
                .long("trials")
                .value_name("N")
                .takes_value(true)
                .help("number of random trials per law [default: 100]"),
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .takes_value(true)
                .help("seed for reproducible inputs (otherwise seeded by the OS)"),
            Arg::with_name("log")
                .long("log")
                .value_name("FILE")
                .takes_value(true)
                .help("also write the log to FILE"),
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("log every trial"),
        ])
}

#[derive(Debug, Clone, PartialEq)]
struct CheckArgs {
    trials: u32,
    seed: Option<u64>,
}

impl CheckArgs {
    fn from_matches(m: &ArgMatches<'_>) -> FailResult<Self>
    { Ok(CheckArgs {
        trials: m.value_of("trials").unwrap_or("100").parse()?,
        seed: match m.value_of("seed") {
            Some(s) => Some(s.parse()?),
            None => None,
        },
    })}
}

// %% CRATES: binary: colmat-check %%
pub fn colmat_check() {
    wrap_result_main(|| {
        let matches = check_app().get_matches();

        let mut logger = GlobalLogger::default();
        logger.verbosity(matches.occurrences_of("verbose") as i32);
        if let Some(path) = matches.value_of("log") {
            logger.path(path);
        }
        logger.apply()?;

        let args = CheckArgs::from_matches(&matches)?;
        let mut sampler = match args.seed {
            Some(seed) => {
                info!("using seed {}", seed);
                Sampler::from_seed(seed)
            },
            None => Sampler::from_entropy(),
        };
        check::run_all(&mut sampler, args.trials)
    });
}
