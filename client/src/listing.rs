//! Client-side filtering and pagination of already fetched lists.

use gsadmin_types::{User, Worker};
use serde::Serialize;

/// Maximum allowed page size.
pub const MAX_PAGE_SIZE: usize = 100;

/// A window over a slice.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, clamped into `1..=total_pages`.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slice out page `page` (1-based) of `items`.
///
/// The page size is clamped to [1, MAX_PAGE_SIZE]; an empty list still has
/// one (empty) page.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let size = page_size.clamp(1, MAX_PAGE_SIZE);
    let total_pages = items.len().div_ceil(size).max(1);
    let page = page.clamp(1, total_pages);
    let start = ((page - 1) * size).min(items.len());
    let end = (start + size).min(items.len());
    Page {
        items: &items[start..end],
        page,
        total_pages,
        total_items: items.len(),
    }
}

/// Workers whose name, phone, area or supervisor username contains `query`,
/// case-insensitively. A blank query matches everything.
pub fn filter_workers<'a>(workers: &'a [Worker], query: &str) -> Vec<&'a Worker> {
    let needle = query.trim().to_lowercase();
    workers
        .iter()
        .filter(|w| {
            needle.is_empty()
                || contains(&w.name, &needle)
                || contains(&w.phone, &needle)
                || contains(&w.area, &needle)
                || w
                    .supervisor
                    .as_ref()
                    .is_some_and(|s| contains(&s.username, &needle))
        })
        .collect()
}

/// Users whose username contains `query`, case-insensitively.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let needle = query.trim().to_lowercase();
    users
        .iter()
        .filter(|u| needle.is_empty() || contains(&u.username, &needle))
        .collect()
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsadmin_types::{StaffId, UserRef};

    fn worker(id: &str, name: &str, phone: &str, area: &str, sup: Option<&str>) -> Worker {
        Worker {
            id: StaffId::new(id).unwrap(),
            name: name.into(),
            phone: phone.into(),
            area: area.into(),
            supervisor: sup.map(|s| UserRef {
                username: s.into(),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn paginate_middle_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 2, 10);
        assert_eq!(page.items, &items[10..20]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 25);
    }

    #[test]
    fn paginate_clamps_page_and_size() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(&items, 9, 0);
        assert_eq!(page.page, 5);
        assert_eq!(page.items, &[5]);

        let page = paginate(&items, 0, 1000);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn empty_list_has_one_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 3, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn worker_filter_fields() {
        let workers = vec![
            worker("w1", "Ali Khan", "03001234567", "North", Some("Sara")),
            worker("w2", "Bilal", "03119876543", "Harbour", None),
        ];
        let ids = |q: &str| {
            filter_workers(&workers, q)
                .iter()
                .map(|w| w.id.as_str().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids("ali"), vec!["w1"]);
        assert_eq!(ids("0311"), vec!["w2"]);
        assert_eq!(ids("HARB"), vec!["w2"]);
        assert_eq!(ids("sara"), vec!["w1"]);
        assert_eq!(ids("  "), vec!["w1", "w2"]);
        assert!(ids("zzz").is_empty());
    }

    #[test]
    fn user_filter_by_username() {
        let users = vec![
            User {
                id: StaffId::new("u1").unwrap(),
                username: "Citizen42".into(),
                email: None,
                created_at: None,
            },
            User {
                id: StaffId::new("u2").unwrap(),
                username: "neighbour".into(),
                email: Some("citizen@example.org".into()),
                created_at: None,
            },
        ];
        let hits = filter_users(&users, "citizen");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "u1");
    }
}
