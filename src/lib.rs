pub mod app;
pub mod camera;
pub mod cli;
pub mod controller;
pub mod flycam;
pub mod input;
pub mod loaders;
pub mod material;
pub mod renderer;
pub mod types;
pub mod window;
