pub mod real;
pub mod vector;
pub mod states;
pub mod forces;
pub mod collisions;
pub mod integrator;
pub mod scenario;
