//! Positional clause storage.
//!
//! Statements collect their expression nodes in a [`ClauseMap`] keyed by a
//! per-statement position enum. Declaration order of the enum is the
//! canonical clause order, so verbs may run in any order and the compiler
//! still walks the clauses the way SQL expects them. Within a position,
//! nodes sort by their explicit order value and then by insertion.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ast::expr::Expr;

/// Marker for per-statement clause position enums.
///
/// `Ord` carries the canonical clause order; deriving it on an enum uses
/// declaration order, which is exactly the contract.
pub trait ClausePosition: Copy + Ord + std::fmt::Debug {}

/// Clause positions of a SELECT statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SelectPosition {
    Columns,
    From,
    Join,
    Where,
    GroupBy,
    Having,
    OrderBy,
    After,
}

impl ClausePosition for SelectPosition {}

/// Clause positions of an INSERT statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InsertPosition {
    Into,
    Columns,
    Values,
    After,
}

impl ClausePosition for InsertPosition {}

/// Clause positions of an UPDATE statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UpdatePosition {
    Table,
    Set,
    Where,
    After,
}

impl ClausePosition for UpdatePosition {}

/// Clause positions of a DELETE statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeletePosition {
    From,
    Where,
    After,
}

impl ClausePosition for DeletePosition {}

#[derive(Debug, Clone)]
struct Slot {
    order: i32,
    seq: usize,
    expr: Expr,
}

/// Expression nodes grouped by clause position.
#[derive(Debug, Clone)]
pub struct ClauseMap<P: ClausePosition> {
    buckets: BTreeMap<P, Vec<Slot>>,
    next_seq: usize,
}

impl<P: ClausePosition> Default for ClauseMap<P> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
            next_seq: 0,
        }
    }
}

impl<P: ClausePosition> ClauseMap<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at the given position with order 0.
    pub fn add(&mut self, expr: Expr, pos: P) {
        self.add_ordered(expr, pos, 0);
    }

    /// Add a node at the given position with an explicit order value.
    /// Lower orders render first; ties keep insertion order.
    pub fn add_ordered(&mut self, expr: Expr, pos: P, order: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.buckets
            .entry(pos)
            .or_default()
            .push(Slot { order, seq, expr });
    }

    /// Replace the first node at `pos` matching `pred`, or add the node at
    /// the end when nothing matches. Replacement keeps the original slot's
    /// order and insertion rank.
    pub fn replace_or_add(&mut self, pos: P, pred: impl Fn(&Expr) -> bool, expr: Expr) {
        if let Some(slot) = self
            .buckets
            .get_mut(&pos)
            .and_then(|slots| slots.iter_mut().find(|s| pred(&s.expr)))
        {
            slot.expr = expr;
        } else {
            self.add(expr, pos);
        }
    }

    /// True when `pos` matching `pred` already holds a node.
    pub fn contains(&self, pos: P, pred: impl Fn(&Expr) -> bool) -> bool {
        self.buckets
            .get(&pos)
            .is_some_and(|slots| slots.iter().any(|s| pred(&s.expr)))
    }

    /// Nodes at one position, sorted by (order, insertion).
    pub fn entries(&self, pos: P) -> Vec<&Expr> {
        let mut slots: Vec<&Slot> = match self.buckets.get(&pos) {
            Some(v) => v.iter().collect(),
            None => return Vec::new(),
        };
        slots.sort_by_key(|s| (s.order, s.seq));
        slots.into_iter().map(|s| &s.expr).collect()
    }

    /// All nodes in canonical order: position rank, then order, then
    /// insertion.
    pub fn snapshot(&self) -> Vec<(P, &Expr)> {
        let mut out = Vec::with_capacity(self.len());
        for (pos, slots) in &self.buckets {
            let mut sorted: Vec<&Slot> = slots.iter().collect();
            sorted.sort_by_key(|s| (s.order, s.seq));
            out.extend(sorted.into_iter().map(|s| (*pos, &s.expr)));
        }
        out
    }

    pub fn has_any(&self, pos: P) -> bool {
        self.buckets.get(&pos).is_some_and(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_orders_by_position_then_order_then_insertion() {
        let mut map = ClauseMap::new();
        map.add(Expr::Raw("w".into()), SelectPosition::Where);
        map.add_ordered(Expr::Raw("c2".into()), SelectPosition::Columns, 5);
        map.add_ordered(Expr::Raw("c1".into()), SelectPosition::Columns, -1);
        map.add(Expr::Raw("c3".into()), SelectPosition::Columns);

        let texts: Vec<&str> = map
            .snapshot()
            .into_iter()
            .map(|(_, e)| match e {
                Expr::Raw(s) => s.as_str(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(texts, ["c1", "c3", "c2", "w"]);
    }

    #[test]
    fn test_replace_or_add_keeps_slot_rank() {
        let mut map = ClauseMap::new();
        map.add(Expr::Limit(10), SelectPosition::After);
        map.add(Expr::ForUpdate, SelectPosition::After);
        map.replace_or_add(
            SelectPosition::After,
            |e| matches!(e, Expr::Limit(_)),
            Expr::Limit(25),
        );

        let entries = map.entries(SelectPosition::After);
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[0], Expr::Limit(25)));
        assert!(matches!(entries[1], Expr::ForUpdate));
    }
}
