use std::fmt::{self, Write};

use serde_json::Value;

use crate::ast::{Column, ColumnInfo, JsonTableExpr, Literal, PathSegment, ScalarExpr, JSON_TABLE_FUNCTION};

/// Render a scalar sub-expression as SQL text.
///
/// This is the generic renderer path segments and function arguments
/// delegate to; columns and parameters come out in MySQL flavor.
pub fn render_scalar<W: Write>(out: &mut W, expr: &ScalarExpr) -> fmt::Result {
    match expr {
        ScalarExpr::Literal(literal) => render_literal(out, literal),
        ScalarExpr::Column(column) => match column {
            Column::Name { name } => out.write_str(name),
            Column::WithRelation { relation, name } => {
                write!(out, "{}.{}", relation, name)
            }
        },
        ScalarExpr::Parameter(name) => write!(out, "@{}", name),
        ScalarExpr::Function(function) => {
            write!(out, "{}(", function.name)?;
            for (i, arg) in function.args.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                render_scalar(out, arg)?;
            }
            out.write_str(")")
        }
    }
}

/// Generic SQL text of a literal: quoted and `''`-escaped strings, bare
/// numbers, TRUE/FALSE keywords, NULL. The single home of these rules;
/// type mappings without special literal treatment delegate here.
pub fn literal_sql(literal: &Literal) -> String {
    match literal {
        Literal::String(s) => format!("'{}'", s.replace('\'', "''")),
        Literal::Int(i) => i.to_string(),
        Literal::Float(n) => n.into_inner().to_string(),
        Literal::Bool(true) => "TRUE".to_string(),
        Literal::Bool(false) => "FALSE".to_string(),
        Literal::Null => "NULL".to_string(),
    }
}

fn render_literal<W: Write>(out: &mut W, literal: &Literal) -> fmt::Result {
    out.write_str(&literal_sql(literal))
}

/// Render a JSON_TABLE node as a complete table source:
/// `JSON_TABLE(<source>, '$<path>' COLUMNS (...)) AS <alias>`.
///
/// Deterministic and order-preserving; no validation happens here. A
/// malformed column list (duplicate names, say) is passed through verbatim
/// and left for the SQL engine to reject.
pub fn render_json_table<W: Write>(out: &mut W, expr: &JsonTableExpr) -> fmt::Result {
    tracing::trace!(alias = %expr.alias(), "rendering JSON_TABLE node");

    write!(out, "{}(", JSON_TABLE_FUNCTION)?;
    render_scalar(out, expr.source())?;

    out.write_str(", '$")?;
    if let Some(path) = expr.path() {
        for segment in path.iter() {
            out.write_str(".")?;
            render_segment(out, segment)?;
        }
    }
    out.write_str("'")?;

    if let Some(columns) = expr.columns() {
        out.write_str(" COLUMNS (")?;
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            render_column(out, column)?;
        }
        out.write_str(")")?;
    }

    out.write_str(")")?;

    render_annotations(out, expr)?;

    write!(out, " AS {}", expr.alias())
}

fn render_segment<W: Write>(out: &mut W, segment: &PathSegment) -> fmt::Result {
    match segment {
        PathSegment::PropertyName(name) => out.write_str(name),
        PathSegment::ArrayIndex(index) => render_scalar(out, index),
    }
}

fn render_column<W: Write>(out: &mut W, column: &ColumnInfo) -> fmt::Result {
    write!(out, "{} {}", column.name, column.type_mapping.store_type())?;

    if let Some(path) = &column.path {
        out.write_str(" PATH '")?;
        for (i, segment) in path.iter().enumerate() {
            if i > 0 {
                out.write_str(".")?;
            }
            render_segment(out, segment)?;
        }
        out.write_str("'")?;
    }

    if column.as_json {
        out.write_str(" AS JSON")?;
    }

    Ok(())
}

fn render_annotations<W: Write>(out: &mut W, expr: &JsonTableExpr) -> fmt::Result {
    if expr.annotations().is_empty() {
        return Ok(());
    }

    out.write_str(" [")?;
    for (i, (name, value)) in expr.annotations().iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        match value {
            Value::String(s) => write!(out, "{}={}", name, s)?,
            other => write!(out, "{}={}", name, other)?,
        }
    }
    out.write_str("]")
}
