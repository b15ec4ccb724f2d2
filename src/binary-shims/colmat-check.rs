fn main() { colmat::entry_points::colmat_check(); }
