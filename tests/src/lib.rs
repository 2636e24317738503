mod enrollment;
mod store;
mod utils;
