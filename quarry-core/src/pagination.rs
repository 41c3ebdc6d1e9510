use crate::{Error, Expr, Select, Statement};
use std::{
    ops::{Deref, DerefMut},
    vec,
};

/// Number of pages needed to show `total_item_count` items, `page_item_count` per page.
pub fn total_page_count(total_item_count: u64, page_item_count: u64) -> u64 {
    if total_item_count == 0 || page_item_count == 0 {
        return 0;
    }
    (total_item_count - 1) / page_item_count + 1
}

/// `SELECT count(*) FROM (<statement>)`
pub fn count_statement(statement: &Statement) -> Statement {
    Select::row_count().from([Expr::parenthesize(statement)])
}

/// Derived statement returning only the page `page_no` (1-based) of `statement`.
pub fn page_statement(statement: &Statement, page_no: u64, page_item_count: u64) -> Statement {
    statement.copy().limit_offset(
        page_item_count,
        page_no.saturating_sub(1).saturating_mul(page_item_count),
    )
}

/// Rejects the page coordinates that cannot address any page.
pub fn check_page(page_no: u64, page_item_count: u64) -> crate::Result<()> {
    if page_no == 0 {
        return Err(Error::msg("The page number starts from 1"));
    }
    if page_item_count == 0 {
        return Err(Error::msg("The page size must be at least 1"));
    }
    Ok(())
}

/// One page of items plus the coordinates of the page within the whole result.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationList<T> {
    items: Vec<T>,
    cur_page_no: u64,
    page_item_count: u64,
    total_item_count: u64,
    total_page_count: u64,
}

impl<T> PaginationList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cur_page_no: 0,
            page_item_count: 0,
            total_item_count: 0,
            total_page_count: 0,
        }
    }

    /// Empty page with the pagination fields computed from the arguments.
    pub fn with_pagination(cur_page_no: u64, page_item_count: u64, total_item_count: u64) -> Self {
        let mut result = Self::new();
        result.set_pagination(cur_page_no, page_item_count, total_item_count);
        result
    }

    pub fn from_items(
        items: Vec<T>,
        cur_page_no: u64,
        page_item_count: u64,
        total_item_count: u64,
    ) -> Self {
        let mut result = Self::with_pagination(cur_page_no, page_item_count, total_item_count);
        result.items = items;
        result
    }

    /// Set the page coordinates, deriving the total page count.
    pub fn set_pagination(
        &mut self,
        cur_page_no: u64,
        page_item_count: u64,
        total_item_count: u64,
    ) -> &mut Self {
        self.cur_page_no = cur_page_no;
        self.page_item_count = page_item_count;
        self.total_item_count = total_item_count;
        self.total_page_count = total_page_count(total_item_count, page_item_count);
        self
    }

    pub fn cur_page_no(&self) -> u64 {
        self.cur_page_no
    }
    pub fn set_cur_page_no(&mut self, cur_page_no: u64) -> &mut Self {
        self.cur_page_no = cur_page_no;
        self
    }
    pub fn page_item_count(&self) -> u64 {
        self.page_item_count
    }
    pub fn set_page_item_count(&mut self, page_item_count: u64) -> &mut Self {
        self.page_item_count = page_item_count;
        self
    }
    pub fn total_item_count(&self) -> u64 {
        self.total_item_count
    }
    pub fn set_total_item_count(&mut self, total_item_count: u64) -> &mut Self {
        self.total_item_count = total_item_count;
        self
    }
    pub fn total_page_count(&self) -> u64 {
        self.total_page_count
    }
    pub fn set_total_page_count(&mut self, total_page_count: u64) -> &mut Self {
        self.total_page_count = total_page_count;
        self
    }

    pub fn has_next_page(&self) -> bool {
        self.cur_page_no < self.total_page_count
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for PaginationList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for PaginationList<T> {
    type Target = Vec<T>;
    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for PaginationList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T> Extend<T> for PaginationList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for PaginationList<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PaginationList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
