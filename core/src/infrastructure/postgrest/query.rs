use crate::domain::{
    listing::value_objects::{FilterClause, FilterOperator, OptionSource, ResourceQuery},
    query::sort::SortRule,
};

/// Render a clause as a PostgREST operator expression, e.g. `in.(1,2)`.
pub fn render_filter(clause: &FilterClause) -> String {
    let value = &clause.value;
    match clause.operator {
        FilterOperator::Eq => format!("eq.{value}"),
        FilterOperator::In => format!("in.({value})"),
        FilterOperator::Overlaps => format!("ov.{{{value}}}"),
        FilterOperator::Gte => format!("gte.{value}"),
        FilterOperator::Lte => format!("lte.{value}"),
        FilterOperator::Ilike => format!("ilike.*{value}*"),
    }
}

/// `col.asc,col2.desc`, or `None` when there is nothing to order by.
pub fn render_order(rules: &[SortRule]) -> Option<String> {
    if rules.is_empty() {
        return None;
    }
    let order = rules
        .iter()
        .map(|rule| {
            let dir = if rule.ascending { "asc" } else { "desc" };
            format!("{}.{}", rule.column, dir)
        })
        .collect::<Vec<_>>()
        .join(",");
    Some(order)
}

pub fn list_query_pairs(query: &ResourceQuery) -> Vec<(String, String)> {
    let mut pairs = vec![("select".to_string(), query.select.to_string())];

    for clause in &query.filters {
        pairs.push((clause.column.to_string(), render_filter(clause)));
    }
    if let Some(order) = render_order(&query.order) {
        pairs.push(("order".to_string(), order));
    }
    pairs.push(("offset".to_string(), query.offset.to_string()));
    pairs.push(("limit".to_string(), query.limit.to_string()));

    pairs
}

pub fn options_query_pairs(source: &OptionSource) -> Vec<(String, String)> {
    vec![
        (
            "select".to_string(),
            format!("{},{}", source.id_column, source.label_column),
        ),
        ("order".to_string(), format!("{}.asc", source.label_column)),
    ]
}

/// Total row count from a `Content-Range` header such as `0-19/57`.
pub fn parse_content_range(header: &str) -> Option<u64> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_filter() {
        assert_eq!(render_filter(&FilterClause::in_list("status", &[3, 4])), "in.(3,4)");
        assert_eq!(
            render_filter(&FilterClause::overlaps("staff_ids", &[7])),
            "ov.{7}"
        );
        assert_eq!(render_filter(&FilterClause::ilike("name", "ana")), "ilike.*ana*");
        assert_eq!(render_filter(&FilterClause::eq("can_clean", true)), "eq.true");
        assert_eq!(render_filter(&FilterClause::gte("mins", 30)), "gte.30");
        assert_eq!(render_filter(&FilterClause::lte("mins", 90)), "lte.90");
    }

    #[test]
    fn test_list_query_pairs() {
        let query = ResourceQuery {
            resource: "appointments",
            select: "*",
            filters: vec![FilterClause::in_list("status", &[1])],
            order: vec![SortRule::asc("status"), SortRule::desc("arrival_time")],
            offset: 20,
            limit: 10,
        };

        let pairs = list_query_pairs(&query);
        let as_refs: Vec<(&str, &str)> = pairs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            as_refs,
            vec![
                ("select", "*"),
                ("status", "in.(1)"),
                ("order", "status.asc,arrival_time.desc"),
                ("offset", "20"),
                ("limit", "10"),
            ]
        );
    }

    #[test]
    fn test_empty_order_is_omitted() {
        assert_eq!(render_order(&[]), None);
    }

    #[test]
    fn test_options_query_pairs() {
        let source = OptionSource {
            resource: "service",
            id_column: "service_id",
            label_column: "name",
        };
        assert_eq!(
            options_query_pairs(&source),
            vec![
                ("select".to_string(), "service_id,name".to_string()),
                ("order".to_string(), "name.asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_content_range() {
        assert_eq!(parse_content_range("0-19/57"), Some(57));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range("0-19/*"), None);
        assert_eq!(parse_content_range("garbage"), None);
    }
}
