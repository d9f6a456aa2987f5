pub mod seed;

pub use seed::resource::SeedResource;
