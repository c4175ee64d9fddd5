//! Pure presentation: state snapshots in, visual trees and paint commands out.

pub mod todo;

pub use todo::{build, render, RenderContext, RenderOutput, TodoStyles, TodoTree, ViewConfig};
