//=========================================================================
// Wayfare Engine — Library Root
//
// This crate defines the public API surface of the Wayfare Engine: a
// side-scrolling scene runtime with a deterministic fixed-timestep
// simulation and a message-passing platform boundary.
//
// Responsibilities:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose the simulation core for hosts that embed `GameWorld` directly
// - Keep internal modules (like `platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use wayfare_engine::EngineBuilder;
//
// fn main() {
//     EngineBuilder::new()
//         .with_title("Course World")
//         .on_frame(|snapshot| {
//             // Hand the snapshot to the render adapter
//             let _ = snapshot;
//         })
//         .build()
//         .run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the simulation systems (input tracking, physics,
// triggers, scenes). It is exposed publicly so hosts can drive
// `GameWorld` directly — e.g. in headless tests or a custom loop —
// but normal application code will mostly use the `Engine` facade.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// event loop) and is kept private, as it is not part of the public
// API surface.
//
// `engine` defines the main engine entry point and initialization logic.
//
mod platform;
mod engine;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
