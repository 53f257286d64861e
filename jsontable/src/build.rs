//!
//! The rendering contract shared by every node.
//!

use crate::builder::{Fragment, QueryBuilder};
use crate::sql::Sql;

/// Something that renders itself as an ordered run of SQL fragments.
///
/// Implementors only write their own syntax and delegate to their children,
/// so rendering a tree is a single top-down walk.
pub trait Build {
    fn build(&self, builder: &mut QueryBuilder);

    /// The fragments of this node, in emission order.
    fn as_sql_parts(&self) -> Vec<Fragment> {
        let mut builder = QueryBuilder::new();
        self.build(&mut builder);
        builder.into_parts()
    }

    /// All fragments of this node reduced into one composed fragment.
    fn as_sql(&self) -> Sql {
        let mut builder = QueryBuilder::new();
        self.build(&mut builder);
        builder.finish()
    }
}

impl<B: Build + ?Sized> Build for &B {
    fn build(&self, builder: &mut QueryBuilder) {
        (**self).build(builder);
    }
}

impl<B: Build + ?Sized> Build for Box<B> {
    fn build(&self, builder: &mut QueryBuilder) {
        (**self).build(builder);
    }
}
