pub mod model;

pub use model::App;
