//! What a page must do after a state transition has been applied.

/// Returned by the `finish_*` transitions so the async glue in pages knows
/// whether to stay put, refresh the entry list, or leave the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Followup {
    Stay,
    Reload,
    Redirect(&'static str),
}
