// Domain layer: immutable time value types. No dependencies beyond chrono/serde.

pub mod model;
