/// Data layer: sample-table model, synthetic generation, and loading.
///
/// ```text
///   ┌───────────┐
///   │ generator │  seed → noisy (age, mass) series → CSV file
///   └───────────┘
///         │
///         ▼
///    data/*.csv
///         │
///         ▼
///   ┌───────────┐
///   │  loader   │  parse file → SampleTable
///   └───────────┘
/// ```
pub mod generator;
pub mod loader;
pub mod model;
