// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup
// - infrastructure: DB adapters
// - presentation: HTTP handlers and routing
// - application: ports and use cases

pub mod application;
pub mod bootstrap;
pub mod infrastructure;
pub mod presentation;
