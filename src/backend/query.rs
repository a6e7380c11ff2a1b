use super::Table;

/// Sort direction for an `order=` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Row selection against one collection: equality filters, one ordering
/// column and an optional limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: Table,
    filters: Vec<(String, String)>,
    order: Option<(String, Order)>,
    limit: Option<u32>,
}

impl Query {
    pub fn table(table: Table) -> Self {
        Self {
            table,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.order = Some((column.to_string(), order));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn target(&self) -> Table {
        self.table
    }

    /// Query-string pairs in PostgREST syntax. `select` is only sent on reads.
    pub fn params(&self, with_select: bool) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.filters.len() + 3);
        if with_select {
            params.push(("select".to_string(), "*".to_string()));
        }
        for (column, value) in &self.filters {
            params.push((column.clone(), format!("eq.{value}")));
        }
        if let Some((column, order)) = &self.order {
            params.push(("order".to_string(), format!("{column}.{}", order.as_str())));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn bare_query_selects_everything() {
        let q = Query::table(Table::Profiles);
        assert_eq!(q.params(true), vec![pair("select", "*")]);
        assert!(q.params(false).is_empty());
    }

    #[test]
    fn filters_order_and_limit_render_in_postgrest_syntax() {
        let q = Query::table(Table::JournalEntries)
            .eq("user_id", "u-1")
            .eq("id", 42)
            .order("created_at", Order::Descending)
            .limit(20);

        assert_eq!(q.target(), Table::JournalEntries);
        assert_eq!(
            q.params(true),
            vec![
                pair("select", "*"),
                pair("user_id", "eq.u-1"),
                pair("id", "eq.42"),
                pair("order", "created_at.desc"),
                pair("limit", "20"),
            ]
        );
    }

    #[test]
    fn ascending_order() {
        let q = Query::table(Table::CounselorBookings).order("appointment_date", Order::Ascending);
        assert_eq!(q.params(false), vec![pair("order", "appointment_date.asc")]);
    }
}
