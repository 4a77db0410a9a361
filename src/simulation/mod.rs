pub mod vector;
pub mod params;
pub mod error;
pub mod body;
pub mod manager;
