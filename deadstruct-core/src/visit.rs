//! AST visitors for the two analysis passes.
//!
//! The declaration pass and the usage pass are deliberately two separate
//! visitor types: `StructDeclVisitor` only ever calls [`UsageTable::declare`]
//! and `StructUsageVisitor` only ever calls [`UsageTable::mark_used`]. A file
//! traversed during the usage pass can therefore never smuggle in a late
//! declaration, and a file traversed during the declaration pass can never
//! mark anything used.
//!
//! Both visitors walk every node depth-first without pruning subtrees, so
//! nested modules, function bodies, and impl blocks are all covered.

use syn::visit::Visit;
use syn::{ExprField, ItemStruct, Member, Path};

use crate::table::UsageTable;

/// Declaration-pass visitor: records every `struct` item into the table.
///
/// Only named composite types count; enums, traits, type aliases, and unions
/// never enter the table, even if they are unused.
pub struct StructDeclVisitor<'t> {
    table: &'t mut UsageTable,
    /// Names newly inserted during this traversal, in declaration order.
    /// Re-declarations of already-known names are not repeated here.
    pub discovered: Vec<String>,
}

impl<'t> StructDeclVisitor<'t> {
    pub fn new(table: &'t mut UsageTable) -> Self {
        Self {
            table,
            discovered: Vec::new(),
        }
    }
}

impl<'ast, 't> Visit<'ast> for StructDeclVisitor<'t> {
    fn visit_item_struct(&mut self, node: &'ast ItemStruct) {
        let name = node.ident.to_string();
        if self.table.declare(&name) {
            self.discovered.push(name);
        }
        syn::visit::visit_item_struct(self, node);
    }
}

/// Usage-pass visitor: marks the member names of every qualified reference
/// as used.
///
/// A qualified reference is either a multi-segment path (`base::Member`, in
/// type position, expressions, or patterns) or a named field access
/// (`base.member`). Every path segment after the base counts as a qualified
/// member, so `types::Foo::new()` marks `Foo`. Bare single-segment
/// identifiers are not usages - this is the selector-only rule, so
/// correlation happens purely by name, irrespective of which module or file
/// the reference sits in.
pub struct StructUsageVisitor<'t> {
    table: &'t mut UsageTable,
}

impl<'t> StructUsageVisitor<'t> {
    pub fn new(table: &'t mut UsageTable) -> Self {
        Self { table }
    }
}

impl<'ast, 't> Visit<'ast> for StructUsageVisitor<'t> {
    fn visit_path(&mut self, node: &'ast Path) {
        if node.segments.len() >= 2 {
            for seg in node.segments.iter().skip(1) {
                self.table.mark_used(&seg.ident.to_string());
            }
        }
        syn::visit::visit_path(self, node);
    }

    fn visit_expr_field(&mut self, node: &'ast ExprField) {
        if let Member::Named(ident) = &node.member {
            self.table.mark_used(&ident.to_string());
        }
        syn::visit::visit_expr_field(self, node);
    }
}
