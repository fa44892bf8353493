//! View models for the GUI demos.
//!
//! Each model holds the state behind one window and exposes the operations
//! its widgets would trigger. No toolkit is involved: a front end binds
//! widgets to these calls and paints [`View::render`].
//!
//! - [`Counter`] — increment / decrement / reset buttons
//! - [`Calculator`] — a four-function keypad
//! - [`TableModel`] — rows under fixed columns, sortable and selectable
//! - [`TreeModel`] — collapsible hierarchy, e.g. quest categories
//! - [`Canvas`] — click to draw, undo, hit-test
//! - [`MenuBar`] — menu paths bound to callbacks
//! - [`FormModel`] — validated input fields
//! - [`ProgressWorker`] / [`ProgressBar`] — a background task reporting
//!   progress over a channel
//! - [`Dialog`] — modal messages

mod calculator;
mod canvas;
mod counter;
mod dialog;
mod error;
mod form;
mod menu;
mod progress;
mod table;
mod tree;

pub use calculator::{Calculator, Key, Op};
pub use canvas::{Canvas, DrawnShape, Point, Tool};
pub use counter::Counter;
pub use dialog::{Dialog, DialogKind};
pub use error::{CalcError, CalcResult, UiError, UiResult};
pub use form::{FormModel, FormValues, Rule};
pub use menu::MenuBar;
pub use progress::{BarState, ProgressBar, ProgressSignal, ProgressWorker, WorkerOutcome};
pub use table::TableModel;
pub use tree::{NodeId, TreeModel};

/// Something that can paint itself as text.
pub trait View {
    /// Window title.
    fn title(&self) -> &str;

    /// A plain-text snapshot of what the window shows.
    fn render(&self) -> String;
}
