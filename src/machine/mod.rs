pub mod lights;
pub use lights::{lights, Lights};

mod machine;
pub use machine::{parse_machines, Button, Machine};
