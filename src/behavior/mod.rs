// Browser-independent effect logic. Nothing here touches web-sys, so the host
// test suite can include these files directly.
pub mod a11y;
pub mod decor;
pub mod diagnostics;
pub mod groups;
pub mod menu;
pub mod pointer;
pub mod scroll;
pub mod timing;
