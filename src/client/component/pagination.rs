use dioxus::prelude::*;

use crate::client::constant::PAGE_SIZES;

/// Page numbers shown on either side of the current page.
const PAGE_WINDOW: u64 = 2;

#[derive(Clone, PartialEq)]
pub struct PaginationData {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationData {
    /// One-based range of the entries on the current page, `None` when there are none.
    pub fn visible_range(&self) -> Option<(u64, u64)> {
        if self.total == 0 {
            return None;
        }
        let first = self.page * self.per_page + 1;
        let last = ((self.page + 1) * self.per_page).min(self.total);
        Some((first, last))
    }
}

/// Zero-based page buttons to render; `None` marks a gap.
///
/// The first and last page are always present, plus `PAGE_WINDOW` pages around the
/// current one.
pub fn page_buttons(current: u64, total_pages: u64) -> Vec<Option<u64>> {
    if total_pages == 0 {
        return vec![Some(0)];
    }

    let start = current.saturating_sub(PAGE_WINDOW);
    let end = (current + PAGE_WINDOW).min(total_pages - 1);

    let mut buttons = Vec::new();
    if start > 0 {
        buttons.push(Some(0));
        if start > 1 {
            buttons.push(None);
        }
    }
    buttons.extend((start..=end).map(Some));
    if end + 1 < total_pages {
        if end + 2 < total_pages {
            buttons.push(None);
        }
        buttons.push(Some(total_pages - 1));
    }

    buttons
}

/// Page navigation for paginated lists. Writes straight into the `page` and `per_page`
/// signals the list resource reads from.
#[component]
pub fn Pagination(page: Signal<u64>, per_page: Signal<u64>, data: PaginationData) -> Element {
    let buttons = page_buttons(data.page, data.total_pages);

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            div {
                class: "flex items-center gap-2 text-sm",
                span { "Per page" }
                select {
                    class: "select select-bordered select-sm",
                    value: "{per_page()}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u64>() {
                            per_page.set(value);
                            page.set(0);
                        }
                    },
                    for size in PAGE_SIZES {
                        option { value: "{size}", "{size}" }
                    }
                }
            }
            div {
                class: "flex flex-col sm:flex-row items-center gap-2 sm:gap-4",
                span {
                    class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                    if let Some((first, last)) = data.visible_range() {
                        "{first}-{last} of {data.total}"
                    } else {
                        "Nothing here yet"
                    }
                }
                div {
                    class: "join",
                    for (index, button) in buttons.into_iter().enumerate() {
                        if let Some(target) = button {
                            button {
                                key: "page-{target}",
                                class: if target == data.page { "join-item btn btn-xs sm:btn-sm btn-active" } else { "join-item btn btn-xs sm:btn-sm" },
                                onclick: move |_| page.set(target),
                                "{target + 1}"
                            }
                        } else {
                            button {
                                key: "gap-{index}",
                                class: "join-item btn btn-xs sm:btn-sm btn-disabled",
                                "…"
                            }
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_every_page_when_few() {
        assert_eq!(page_buttons(0, 3), vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn inserts_gaps_around_window() {
        assert_eq!(
            page_buttons(10, 20),
            vec![
                Some(0),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(19)
            ]
        );
    }

    #[test]
    fn skips_gap_when_adjacent_to_edge() {
        assert_eq!(
            page_buttons(3, 6),
            vec![Some(0), Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn empty_list_has_single_page() {
        assert_eq!(page_buttons(0, 0), vec![Some(0)]);
    }

    #[test]
    fn visible_range_clamps_to_total() {
        let data = PaginationData {
            page: 2,
            per_page: 10,
            total: 25,
            total_pages: 3,
        };
        assert_eq!(data.visible_range(), Some((21, 25)));

        let empty = PaginationData {
            total: 0,
            total_pages: 0,
            ..data
        };
        assert_eq!(empty.visible_range(), None);
    }
}
