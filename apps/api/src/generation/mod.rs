// Template registry and personalization renderer.
// Rendering is pure: every call returns a fresh RenderedContent and never
// touches the registry's templates.

pub mod catalog;
pub mod generator;
pub mod handlers;
pub mod personalize;
pub mod registry;
pub mod renderer;
pub mod template;
