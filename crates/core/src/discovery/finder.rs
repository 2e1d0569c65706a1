//! Query pipeline: resolve roots, scan, dedupe, load, filter, sort.

use super::archive::ArchiveScanner;
use super::filter::TagFilter;
use super::loader::Loader;
use super::resolver::PathResolver;
use super::tree::TreeScanner;
use crate::context::ScanContext;
use crate::error::Result;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::time::Instant;
use tagscan_api::{ComponentId, Member, SearchRoot, Tag, Unit};
use tracing::{debug, info};

/// Answers unit and member queries against one [`ScanContext`].
pub struct UnitFinder<'a> {
    ctx: &'a ScanContext,
}

impl<'a> UnitFinder<'a> {
    pub fn new(ctx: &'a ScanContext) -> Self {
        Self { ctx }
    }

    /// All loadable units in `namespace` (and below) carrying `required`,
    /// or every loadable unit when `required` is `None`.
    ///
    /// Sorted by identifier, no duplicates. Fails only on an unsupported
    /// root location or an unreadable archive.
    pub fn find_units(&self, namespace: &str, required: Option<&Tag>) -> Result<Vec<Unit>> {
        let start = Instant::now();
        let roots = PathResolver::new(self.ctx.search_path()).resolve(namespace)?;
        let ids = self.collect_identifiers(namespace, &roots)?;

        let loaded = Loader::new(self.ctx.loader(), self.ctx.config().parallel).load_all(&ids);
        let loaded_count = loaded.len();

        let filter = TagFilter::new(required.cloned());
        let mut units: Vec<Unit> = loaded.into_iter().filter(|u| filter.matches(u)).collect();
        units.sort_by(|a, b| a.id.cmp(&b.id));
        units.dedup_by(|a, b| a.id == b.id);

        info!(
            "Unit scan of '{}' complete: {} roots, {} identifiers, {} loaded, {} matched in {:?}",
            namespace,
            roots.len(),
            ids.len(),
            loaded_count,
            units.len(),
            start.elapsed()
        );

        Ok(units)
    }

    /// Units whose designated runner is exactly `runner`.
    pub fn find_units_by_exact_runner(
        &self,
        namespace: &str,
        runner: &Tag,
    ) -> Result<Vec<Unit>> {
        let runners = self.ctx.runner_provider();
        let mut units = self.find_units(namespace, None)?;
        units.retain(|unit| runners.runner_of(unit).as_ref() == Some(runner));
        Ok(units)
    }

    /// Every member of every unit carrying `tag`, as one list sorted by
    /// member name.
    pub fn find_members(units: &[Unit], tag: &Tag) -> Vec<Member> {
        let filter = TagFilter::requiring(tag.clone());
        let mut members: Vec<Member> = units
            .iter()
            .flat_map(|unit| unit.members())
            .filter(|member| filter.matches(member))
            .collect();
        members.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.owner.cmp(&b.owner)));
        members
    }

    /// Same predicate as [`Self::find_members`], counted.
    pub fn count_members(units: &[Unit], tag: &Tag) -> usize {
        let filter = TagFilter::requiring(tag.clone());
        units
            .iter()
            .flat_map(|unit| unit.members.iter())
            .filter(|member| filter.matches(*member))
            .count()
    }

    /// Union of every root's identifiers, restricted to `namespace`.
    fn collect_identifiers(
        &self,
        namespace: &str,
        roots: &[SearchRoot],
    ) -> Result<BTreeSet<ComponentId>> {
        let config = self.ctx.config();
        let scan_root = |root: &SearchRoot| -> Result<BTreeSet<ComponentId>> {
            debug!("Scanning {} root {}", root.kind(), root);
            match root {
                SearchRoot::Directory(path) => Ok(TreeScanner::new(config).scan(path, namespace)),
                SearchRoot::Archive { archive, inner } => {
                    ArchiveScanner::new(config).scan(archive, inner, namespace)
                }
            }
        };

        let partials: Vec<BTreeSet<ComponentId>> = if config.parallel {
            roots.par_iter().map(scan_root).collect::<Result<_>>()?
        } else {
            roots.iter().map(scan_root).collect::<Result<_>>()?
        };

        let mut ids: BTreeSet<ComponentId> = partials.into_iter().flatten().collect();
        ids.retain(|id| id.is_within(namespace));
        Ok(ids)
    }
}
