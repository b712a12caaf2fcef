mod availability;
mod classify;
mod grid;
mod math;
mod paint;
mod picker;
mod selection;
mod widget;
mod window;
pub(crate) use self::availability::Availability;
pub(crate) use self::classify::RangeClassifier;
pub(crate) use self::grid::{DayCell, GridGenerator, MonthGrid, SelectMode};
pub(crate) use self::math::WeekStart;
pub(crate) use self::picker::RangePicker;
pub(crate) use self::selection::{Phase, SelectionState};
pub(crate) use self::widget::PickerView;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;
