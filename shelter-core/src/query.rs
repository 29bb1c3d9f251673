#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// One read against a named collection: select everything, optionally
/// filtered by a single equality, ordered by the service (the front-end
/// never re-sorts).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectionQuery {
    pub collection: &'static str,
    pub filter: Option<(&'static str, &'static str)>,
    pub order: Option<(&'static str, Direction)>,
}

impl CollectionQuery {
    pub fn pets() -> Self {
        Self {
            collection: "pets",
            filter: Some(("status", "available")),
            order: Some(("created_at", Direction::Descending)),
        }
    }

    pub fn news() -> Self {
        Self {
            collection: "news",
            filter: None,
            order: Some(("created_at", Direction::Descending)),
        }
    }

    pub fn organizations() -> Self {
        Self {
            collection: "organizations",
            filter: None,
            order: Some(("name", Direction::Ascending)),
        }
    }

    pub fn reports() -> Self {
        Self {
            collection: "reports",
            filter: None,
            order: Some(("created_at", Direction::Descending)),
        }
    }

    /// PostgREST-style query string, stable across calls.
    pub fn to_params(&self) -> String {
        let mut params = String::from("select=*");
        if let Some((column, value)) = self.filter {
            params.push_str(&format!("&{column}=eq.{value}"));
        }
        if let Some((column, direction)) = self.order {
            let dir = match direction {
                Direction::Ascending => "asc",
                Direction::Descending => "desc",
            };
            params.push_str(&format!("&order={column}.{dir}"));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pets_filter_available_newest_first() {
        let query = CollectionQuery::pets();
        assert_eq!(query.collection, "pets");
        assert_eq!(query.to_params(), "select=*&status=eq.available&order=created_at.desc");
    }

    #[test]
    fn organizations_order_by_name_ascending() {
        let query = CollectionQuery::organizations();
        assert_eq!(query.to_params(), "select=*&order=name.asc");
    }

    #[test]
    fn news_and_reports_newest_first() {
        assert_eq!(CollectionQuery::news().to_params(), "select=*&order=created_at.desc");
        assert_eq!(CollectionQuery::reports().to_params(), "select=*&order=created_at.desc");
    }
}
