// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers for one invocation.
//
// Rules for this layer:
//   - No printing (that's Layer 1)
//   - No direct file access (that's Layer 6)
//   - No reading the process environment (main does that once)
//   - Only workflow coordination

// Data file path resolution and environment settings
pub mod config;

// The load → operate → save workflow
pub mod roster_use_case;
