pub mod cheapest_path;
pub mod mcmf;
