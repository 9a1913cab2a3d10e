// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits describing what a roster IS.
//
// Rules for this layer:
//   - NO file I/O
//   - NO printing
//   - Only data types, the add/select rules, and the storage trait
//
// Everything here can be unit tested without touching the disk.

// A single student record and the roster operations
pub mod student;

// Storage abstraction implemented by the infrastructure layer
pub mod traits;
