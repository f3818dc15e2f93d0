//! Page lifecycle coordination.
//!
//! ## Usage
//!
//! [`PageLifecycleCoordinator`] is the state machine between the host
//! scroller and the rest of the core. The host reports settled pages through
//! [`on_page_selected`](PageLifecycleCoordinator::on_page_selected); the
//! coordinator resolves the unit shown there and notifies the listener.
//!
//! Programmatic navigation never teleports. [`move_to`] repositions the
//! current page next to the target and returns a [`ScrollRequest`]: the host
//! jumps to `from` without animation, then animates to `to`, so every jump
//! reads as a one-page swipe in the right direction.
//!
//! [`move_to`]: PageLifecycleCoordinator::move_to
use std::{fmt, sync::Arc};

use chrono::NaiveDate;
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    error::{CalendarError, RangeError},
    listener::{CalendarListener, NoopListener},
    mapper::PageIndexMapper,
    unit::CalendarUnit,
};

/// Visual direction of a programmatic page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Toward earlier units (content slides in from the left).
    Backward,
    /// Toward later units.
    Forward,
}

/// A scroll the host should perform after a programmatic move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Page to jump to without animation.
    pub from: usize,
    /// Page to animate to.
    pub to: usize,
    /// Direction of the animation.
    pub direction: SwipeDirection,
}

/// Result of [`PageLifecycleCoordinator::move_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The target is already displayed.
    Unchanged,
    /// The target lies outside the pageable range; nothing changed.
    Blocked,
    /// The host should perform the given scroll.
    Scroll(ScrollRequest),
}

/// Pages entering and leaving the live window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowChange {
    /// Pages that must be materialized.
    pub added: SmallVec<[usize; 4]>,
    /// Pages that may be recycled.
    pub removed: SmallVec<[usize; 4]>,
}

impl WindowChange {
    /// Returns true when the window did not change.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Returns the stable tag of the page at `index`.
pub fn page_tag(index: usize) -> String {
    format!("f{index}")
}

/// Tracks the current page and the materialized pages around it.
pub struct PageLifecycleCoordinator {
    mapper: PageIndexMapper,
    current_index: usize,
    current_unit: CalendarUnit,
    live_pages: SmallVec<[usize; 4]>,
    pending_scroll: Option<usize>,
    listener: Arc<dyn CalendarListener>,
}

impl fmt::Debug for PageLifecycleCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageLifecycleCoordinator")
            .field("mapper", &self.mapper)
            .field("current_index", &self.current_index)
            .field("current_unit", &self.current_unit)
            .field("live_pages", &self.live_pages)
            .field("pending_scroll", &self.pending_scroll)
            .finish_non_exhaustive()
    }
}

impl PageLifecycleCoordinator {
    /// Creates a coordinator showing `initial`.
    ///
    /// An initial unit outside the mapper's range is clamped to the nearest
    /// page. The listener receives `on_unit_changed` for the initial unit.
    ///
    /// # Errors
    ///
    /// Fails when `initial` has a different granularity than the mapper.
    pub fn new(
        mapper: PageIndexMapper,
        initial: CalendarUnit,
        listener: Arc<dyn CalendarListener>,
    ) -> Result<Self, CalendarError> {
        let current_unit = mapper.clamp_unit(initial)?;
        let current_index = mapper.unit_to_index(current_unit)?;
        let coordinator = Self {
            mapper,
            current_index,
            current_unit,
            live_pages: SmallVec::new(),
            pending_scroll: None,
            listener,
        };
        debug!(
            "Coordinator starts at page {} ({})",
            current_index, current_unit
        );
        coordinator.listener.on_unit_changed(current_unit);
        Ok(coordinator)
    }

    /// Creates a coordinator with a [`NoopListener`].
    ///
    /// # Errors
    ///
    /// See [`PageLifecycleCoordinator::new`].
    pub fn without_listener(
        mapper: PageIndexMapper,
        initial: CalendarUnit,
    ) -> Result<Self, CalendarError> {
        Self::new(mapper, initial, Arc::new(NoopListener))
    }

    /// Returns the mapper in use.
    pub fn mapper(&self) -> &PageIndexMapper {
        &self.mapper
    }

    /// Returns the current page index.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the unit on the current page.
    pub fn current_unit(&self) -> CalendarUnit {
        self.current_unit
    }

    /// Returns the page the host was asked to scroll to, if any.
    pub fn pending_scroll(&self) -> Option<usize> {
        self.pending_scroll
    }

    /// Returns the materialized pages in ascending order.
    pub fn live_pages(&self) -> &[usize] {
        &self.live_pages
    }

    /// Returns the tags of the materialized pages in ascending page order.
    pub fn live_page_tags(&self) -> impl Iterator<Item = String> + '_ {
        self.live_pages.iter().map(|index| page_tag(*index))
    }

    /// Replaces the listener.
    pub fn set_listener(&mut self, listener: Arc<dyn CalendarListener>) {
        self.listener = listener;
    }

    /// Returns the listener.
    pub fn listener(&self) -> &Arc<dyn CalendarListener> {
        &self.listener
    }

    /// Handles a page the host scroller settled on.
    ///
    /// Notifies the listener on every call, even when the page did not change.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::IndexOutOfRange`] for an index past the last page;
    /// the current page stays as it was.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_page_selected(&mut self, index: usize) -> Result<CalendarUnit, RangeError> {
        let unit = self.mapper.index_to_unit(index)?;
        self.current_index = index;
        self.current_unit = unit;
        if self.pending_scroll == Some(index) {
            self.pending_scroll = None;
        }
        debug!("Page {} selected ({})", index, unit);
        self.listener.on_unit_changed(unit);
        Ok(unit)
    }

    /// Navigates to the unit containing `target`.
    ///
    /// The current page is moved to the unit adjacent to the target, on the
    /// side navigation comes from, and the listener is notified of it. The
    /// returned request then animates the last step. A target outside the
    /// pageable range leaves everything unchanged.
    pub fn move_to(&mut self, target: NaiveDate) -> MoveOutcome {
        let target_unit = CalendarUnit::of(target, self.mapper.granularity());
        if target_unit == self.current_unit {
            return MoveOutcome::Unchanged;
        }
        let to = match self.mapper.unit_to_index(target_unit) {
            Ok(index) => index,
            Err(err) => {
                debug!("Move to {} blocked: {}", target, err);
                return MoveOutcome::Blocked;
            }
        };

        let (direction, staging) = if target < self.current_unit.first_day() {
            (SwipeDirection::Backward, target_unit.next())
        } else {
            (SwipeDirection::Forward, target_unit.prev())
        };
        let Some(staging) = staging else {
            return MoveOutcome::Blocked;
        };
        let Ok(from) = self.mapper.unit_to_index(staging) else {
            return MoveOutcome::Blocked;
        };

        self.current_index = from;
        self.current_unit = staging;
        self.pending_scroll = Some(to);
        debug!(
            "Moving {:?} from page {} to page {} ({})",
            direction, from, to, target_unit
        );
        self.listener.on_unit_changed(staging);
        MoveOutcome::Scroll(ScrollRequest {
            from,
            to,
            direction,
        })
    }

    /// Requests a one-page step back.
    ///
    /// Returns the page to scroll to, or `None` on the first page.
    pub fn prev_page(&mut self) -> Option<usize> {
        let target = self.current_index.checked_sub(1)?;
        self.pending_scroll = Some(target);
        Some(target)
    }

    /// Requests a one-page step forward.
    ///
    /// Returns the page to scroll to, or `None` on the last page.
    pub fn next_page(&mut self) -> Option<usize> {
        let target = self.current_index + 1;
        if !self.mapper.contains_index(target) {
            return None;
        }
        self.pending_scroll = Some(target);
        Some(target)
    }

    /// Shows `unit` immediately, without a scroll animation.
    ///
    /// # Errors
    ///
    /// Fails when no page shows `unit`; the current page stays as it was.
    pub fn set_displayed_unit(&mut self, unit: CalendarUnit) -> Result<usize, CalendarError> {
        let index = self.mapper.unit_to_index(unit)?;
        self.current_index = index;
        self.current_unit = unit;
        self.pending_scroll = None;
        self.listener.on_unit_changed(unit);
        Ok(index)
    }

    /// Swaps in a new mapper and shows `unit`, clamped to the new range.
    ///
    /// Page indices change meaning, so every live page is dropped.
    ///
    /// # Errors
    ///
    /// Fails when `unit` has a different granularity than `mapper`; the
    /// coordinator keeps its previous mapper in that case.
    pub fn replace_mapper(
        &mut self,
        mapper: PageIndexMapper,
        unit: CalendarUnit,
    ) -> Result<usize, CalendarError> {
        let unit = mapper.clamp_unit(unit)?;
        let index = mapper.unit_to_index(unit)?;
        self.mapper = mapper;
        self.current_index = index;
        self.current_unit = unit;
        self.pending_scroll = None;
        self.live_pages.clear();
        debug!(
            "Mapper replaced: {} pages, showing page {} ({})",
            mapper.item_count(),
            index,
            unit
        );
        self.listener.on_unit_changed(unit);
        Ok(index)
    }

    /// Records that the host materialized the page at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::IndexOutOfRange`] for an index past the last page.
    pub fn materialize(&mut self, index: usize) -> Result<CalendarUnit, RangeError> {
        let unit = self.mapper.index_to_unit(index)?;
        if let Err(position) = self.live_pages.binary_search(&index) {
            debug!("Materializing page {} ({})", index, unit);
            self.live_pages.insert(position, index);
        }
        Ok(unit)
    }

    /// Records that the host recycled the page at `index`.
    ///
    /// Returns false when the page was not live.
    pub fn recycle(&mut self, index: usize) -> bool {
        match self.live_pages.binary_search(&index) {
            Ok(position) => {
                debug!("Recycling page {}", index);
                self.live_pages.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Keeps exactly the pages within `beyond` of the current page alive.
    pub fn sync_window(&mut self, beyond: usize) -> WindowChange {
        let wanted = window_pages(self.current_index, self.mapper.item_count(), beyond);
        let mut change = WindowChange::default();
        for index in &self.live_pages {
            if wanted.binary_search(index).is_err() {
                change.removed.push(*index);
            }
        }
        for index in &wanted {
            if self.live_pages.binary_search(index).is_err() {
                change.added.push(*index);
            }
        }
        if !change.is_empty() {
            debug!(
                "Live window around page {}: +{:?} -{:?}",
                self.current_index, change.added, change.removed
            );
        }
        self.live_pages = wanted;
        change
    }
}

fn window_pages(current: usize, page_count: usize, beyond: usize) -> SmallVec<[usize; 4]> {
    if page_count == 0 {
        return SmallVec::new();
    }
    let start = current.saturating_sub(beyond);
    let end = current.saturating_add(beyond).saturating_add(1).min(page_count);
    (start..end).collect()
}
