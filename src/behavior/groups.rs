/// Effect groups installed by the page controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Diagnostics,
    A11y,
    Nav,
    Scroll,
    Animation,
    Interactive,
    Cursor,
    Entrance,
}

/// When a group may be installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// As soon as the module starts: window-level hooks that must not miss
    /// errors or paint before the document finishes parsing.
    Startup,
    /// After `DOMContentLoaded`, once the markup can be queried.
    DocumentReady,
}

impl Group {
    /// Installation order.
    pub const ALL: [Group; 8] = [
        Group::Diagnostics,
        Group::A11y,
        Group::Nav,
        Group::Scroll,
        Group::Animation,
        Group::Interactive,
        Group::Cursor,
        Group::Entrance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Group::Diagnostics => "diagnostics",
            Group::A11y => "a11y",
            Group::Nav => "nav",
            Group::Scroll => "scroll",
            Group::Animation => "animation",
            Group::Interactive => "interactive",
            Group::Cursor => "cursor",
            Group::Entrance => "entrance",
        }
    }

    pub fn phase(self) -> Phase {
        match self {
            Group::Diagnostics | Group::A11y => Phase::Startup,
            _ => Phase::DocumentReady,
        }
    }
}

/// Groups belonging to `phase`, in installation order.
pub fn groups_in(phase: Phase) -> impl Iterator<Item = Group> {
    Group::ALL.into_iter().filter(move |g| g.phase() == phase)
}
