//! Looking for mistakes in a [`BuildConfig`].
//!
//! None of this is done while reading or generating: a blueprint with
//! duplicate targets or unknown dependencies is still rendered as written.

use super::error::CheckError;
use super::BuildConfig;
use crate::error::{ErrorWithLocation, Location};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::path::Path;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
	New,
	InProgress,
	Done,
}

/// Find duplicate targets, dependencies on unknown targets, and dependency
/// cycles.
///
/// The problems are returned in the order of the targets they belong to, with
/// the line of that target. Dependency names are resolved to the first
/// target with that name.
pub fn check(config: &BuildConfig, file_name: &Path) -> Vec<ErrorWithLocation<CheckError>> {
	let targets = &config.targets;
	let at = |i: usize| Location::new(file_name, targets[i].line);

	let mut problems = Vec::new();

	let mut index = IndexMap::with_capacity(targets.len());
	for (i, target) in targets.iter().enumerate() {
		match index.entry(target.name.as_str()) {
			Entry::Occupied(_) => {
				problems.push(at(i).error(CheckError::DuplicateTarget(target.name.clone())))
			}
			Entry::Vacant(entry) => {
				entry.insert(i);
			}
		}
	}

	for (i, target) in targets.iter().enumerate() {
		for dependency in &target.dependencies {
			if !index.contains_key(dependency.as_str()) {
				problems.push(at(i).error(CheckError::UnknownDependency {
					target: target.name.clone(),
					dependency: dependency.clone(),
				}));
			}
		}
	}

	let mut visits = vec![Visit::New; targets.len()];
	let mut cycles = Vec::new();
	for &i in index.values() {
		find_cycles(config, &index, i, &mut visits, &mut cycles);
	}
	for cycle in cycles {
		let names = cycle.iter().map(|&i| targets[i].name.clone()).collect();
		problems.push(at(cycle[0]).error(CheckError::DependencyCycle(names)));
	}

	problems.sort_by_key(|p| p.line);
	problems
}

// Depth-first search from `root`, without recursion. Every edge back into the
// current path is one cycle, recorded as the path from the target it points
// to, back to that target.
fn find_cycles(
	config: &BuildConfig,
	index: &IndexMap<&str, usize>,
	root: usize,
	visits: &mut [Visit],
	cycles: &mut Vec<Vec<usize>>,
) {
	if visits[root] != Visit::New {
		return;
	}
	visits[root] = Visit::InProgress;

	// The current path, with the index of the next dependency to follow for
	// each target on it.
	let mut stack = vec![(root, 0)];

	while let Some((i, next)) = stack.last_mut() {
		let i = *i;
		let dependency = config.targets[i].dependencies.get(*next);
		*next += 1;
		let dependency = match dependency {
			Some(dependency) => dependency,
			None => {
				visits[i] = Visit::Done;
				stack.pop();
				continue;
			}
		};
		let j = match index.get(dependency.as_str()) {
			Some(&j) => j,
			None => continue,
		};
		match visits[j] {
			Visit::New => {
				visits[j] = Visit::InProgress;
				stack.push((j, 0));
			}
			Visit::InProgress => {
				let start = stack.iter().rposition(|&(k, _)| k == j).unwrap_or(0);
				let mut cycle: Vec<usize> = stack[start..].iter().map(|&(k, _)| k).collect();
				cycle.push(j);
				cycles.push(cycle);
			}
			Visit::Done => (),
		}
	}
}
