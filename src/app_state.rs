//! The state behind the interactive sidebar preview.
//!
//! The terminal preview behaves like a reader paging through a book: every navigation is a fresh
//! page load, so the sidebar is rebuilt and attached again with whatever scroll offset the
//! previous page left in the session. Clicking a sidebar row records the offset first; paging
//! with next/previous does not, so the new page centres its active row instead.

use crate::config::Config;
use crate::controller::{AttachedSidebar, SidebarController};
use crate::error::{Error, Result};
use crate::host::{Row, Scrollbox, SidebarHost};
use crate::location::{self, CurrentPage};
use crate::nav::NavigationTree;
use crate::scroll::ScrollState;

/// Row height used by the terminal, one line per row.
pub const TERMINAL_ROW_HEIGHT: u32 = 1;

/// A book open at one page, with the sidebar attached.
pub struct AppState {
    /// The book's chapter list.
    pub tree: NavigationTree,
    /// Preferences applied on every attachment.
    pub config: Config,
    /// Address of the book root directory.
    pub book_root: String,
    /// Page currently shown.
    pub page: CurrentPage,
    /// Container the sidebar is rendered into.
    pub scrollbox: Scrollbox,
    /// The attached sidebar for the current page.
    pub sidebar: AttachedSidebar,
    /// Session scroll state shared across page loads.
    pub scroll: ScrollState,
    /// Row under the cursor, indexing [`Scrollbox::rows`].
    pub cursor: usize,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
}

impl AppState {
    /// Opens the book at `location`, whose relative links need `path_to_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the location is not a usable URL.
    pub fn open(
        tree: NavigationTree,
        config: Config,
        location: &str,
        path_to_root: &str,
        scroll: ScrollState,
        viewport_height: u32,
    ) -> Result<Self> {
        let page = CurrentPage::new(location, &config.index_document)?;
        let book_root = page
            .book_root(path_to_root)
            .ok_or_else(|| Error::Location {
                location: path_to_root.to_string(),
                source: url::ParseError::RelativeUrlWithoutBase,
            })?;

        let mut scrollbox = Scrollbox::new(TERMINAL_ROW_HEIGHT, viewport_height);
        let mut scroll = scroll;
        let sidebar = SidebarController::new(tree.clone(), path_to_root)
            .with_options(config.render_options())
            .attach(&mut scrollbox, &page, &mut scroll);

        let mut app = Self {
            tree,
            config,
            book_root,
            page,
            scrollbox,
            sidebar,
            scroll,
            cursor: 0,
            message: None,
        };
        app.cursor = app.active_row().unwrap_or(0);
        Ok(app)
    }

    /// Loads `page` as a new page view: rebuild the sidebar and attach it again.
    fn load(&mut self, page: CurrentPage) {
        let path_to_root = page
            .book_path(&self.book_root)
            .map(|path| location::path_to_root_for(&path))
            .unwrap_or_default();

        let mut scrollbox = Scrollbox::new(TERMINAL_ROW_HEIGHT, self.scrollbox.viewport_height);
        self.sidebar = SidebarController::new(self.tree.clone(), path_to_root)
            .with_options(self.config.render_options())
            .attach(&mut scrollbox, &page, &mut self.scroll);
        self.scrollbox = scrollbox;
        self.page = page;
        self.cursor = self.active_row().unwrap_or(0);
    }

    #[must_use]
    /// Visible sidebar rows.
    pub fn rows(&self) -> Vec<Row> {
        self.scrollbox.rows()
    }

    #[must_use]
    /// Row index of the current page's link.
    pub fn active_row(&self) -> Option<usize> {
        self.rows().iter().position(|row| row.active)
    }

    #[must_use]
    /// The current page relative to the book root.
    pub fn book_path(&self) -> Option<String> {
        self.page.book_path(&self.book_root)
    }

    /// Adapts the viewport to the terminal, keeping the offset in range.
    pub fn resize(&mut self, viewport_height: u32) {
        if self.scrollbox.viewport_height != viewport_height {
            self.scrollbox.viewport_height = viewport_height;
            let offset = self.scrollbox.scroll_top();
            self.scrollbox.set_scroll_top(offset);
        }
    }

    /// Moves the cursor up one row.
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.scrollbox.reveal_row(self.cursor);
    }

    /// Moves the cursor down one row.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.rows().len() {
            self.cursor += 1;
        }
        self.scrollbox.reveal_row(self.cursor);
    }

    /// Clicks the row under the cursor and follows its link.
    ///
    /// Returns `true` when a new page was loaded.
    pub fn click_cursor(&mut self) -> bool {
        let Some(row) = self.rows().into_iter().nth(self.cursor) else {
            return false;
        };
        let Some(click) = self.sidebar.click(&self.scrollbox, row.label, &mut self.scroll) else {
            self.message = Some(format!("{} has no page yet", row.text.trim()));
            return false;
        };
        match click
            .href
            .and_then(|href| self.page.follow(&href, &self.config.index_document))
        {
            Some(target) if target.book_path(&self.book_root).is_some() => {
                self.message = None;
                self.load(target);
                true
            }
            _ => {
                self.message = Some("link leads outside the book".to_string());
                false
            }
        }
    }

    /// Flips the expand/collapse control of the row under the cursor, if it has one.
    pub fn toggle_cursor(&mut self) {
        let Some(toggle) = self.rows().get(self.cursor).and_then(|row| row.toggle) else {
            return;
        };
        if self.sidebar.toggle(&mut self.scrollbox, toggle).is_some() {
            let offset = self.scrollbox.scroll_top();
            self.scrollbox.set_scroll_top(offset);
            self.cursor = self.cursor.min(self.rows().len().saturating_sub(1));
        }
    }

    /// Goes to the next chapter in reading order, as a "next" button would.
    pub fn next_chapter(&mut self) -> bool {
        self.page_to(|tree, path| tree.neighbours(path).1.map(ToString::to_string))
    }

    /// Goes to the previous chapter in reading order, as a "previous" button would.
    pub fn prev_chapter(&mut self) -> bool {
        self.page_to(|tree, path| tree.neighbours(path).0.map(ToString::to_string))
    }

    /// The tree entry of the current page, falling back to the active link's target when the
    /// page itself is not listed (a book's index page stands in for its first chapter).
    fn current_chapter(&self) -> Option<String> {
        let path = self.book_path()?;
        if self.tree.flatten().iter().any(|entry| entry.node.href == path) {
            return Some(path);
        }
        let link = self.sidebar.active()?;
        let href = self.scrollbox.dom().attribute(link, "href")?;
        self.page
            .follow(href, &self.config.index_document)?
            .book_path(&self.book_root)
    }

    fn page_to(&mut self, pick: impl Fn(&NavigationTree, &str) -> Option<String>) -> bool {
        let target = self
            .current_chapter()
            .and_then(|path| pick(&self.tree, &path))
            .and_then(|href| {
                CurrentPage::parse(&self.book_root)
                    .ok()?
                    .follow(&href, &self.config.index_document)
            });
        match target {
            Some(page) => {
                self.message = None;
                self.load(page);
                true
            }
            None => {
                self.message = Some("no further chapter".to_string());
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
