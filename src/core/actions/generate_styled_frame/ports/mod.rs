pub mod cell_map;
