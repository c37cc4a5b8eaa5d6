//! Pagination parameters for the `/{pageSize}/{pageNum}` list endpoints.

/// A page request. Both values are clamped to at least 1 before they ever
/// reach a URL; the backend rejects zero with a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_size: u32,
    pub page_num: u32,
}

impl PageRequest {
    pub fn new(page_size: u32, page_num: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            page_num: page_num.max(1),
        }
    }

    /// The `{pageSize}/{pageNum}` path suffix.
    pub fn path_segment(&self) -> String {
        format!("{}/{}", self.page_size, self.page_num)
    }

    pub fn with_size(self, page_size: u32) -> Self {
        // changing the page size restarts from the first page
        Self::new(page_size, 1)
    }

    pub fn with_num(self, page_num: u32) -> Self {
        Self::new(self.page_size, page_num)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_size: 5,
            page_num: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_one() {
        let page = PageRequest::new(0, 0);
        assert_eq!(page, PageRequest::new(1, 1));
        assert_eq!(page.path_segment(), "1/1");
    }

    #[test]
    fn size_change_resets_page_number() {
        let page = PageRequest::new(5, 4).with_size(20);
        assert_eq!(page, PageRequest::new(20, 1));
    }

    #[test]
    fn default_is_five_per_page() {
        assert_eq!(PageRequest::default().path_segment(), "5/1");
    }
}
