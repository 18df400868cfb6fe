//! The example catalogue, in declaration order.

use regex::Regex;

use crate::ExampleCase;

pub mod comprehension;
pub mod exceptions;
pub mod features;
pub mod iterating;
pub mod resources;
pub mod rust_idioms;
pub mod sets;
pub mod unpacking;

/// Every example case, grouped and ordered as declared.
pub fn all() -> Vec<ExampleCase> {
    vec![
        features::multiple_assignment_case(),
        features::loop_else_case(),
        features::chained_comparisons_case(),
        features::string_templating_case(),
        features::decorators_case(),
        features::shared_default_arguments_case(),
        features::sequence_operators_case(),
        features::membership_case(),
        features::zip_and_transpose_case(),
        features::full_range_selection_case(),
        features::partial_application_case(),
        features::functions_as_values_case(),
        exceptions::try_except_else_finally_case(),
        exceptions::reraise_keeps_source_case(),
        iterating::sorting_by_key_case(),
        iterating::lazy_generators_case(),
        iterating::sending_values_to_generators_case(),
        iterating::slicing_case(),
        sets::set_difference_case(),
        sets::set_union_case(),
        sets::set_intersection_case(),
        sets::set_symmetric_difference_case(),
        comprehension::projection_case(),
        comprehension::nested_case(),
        comprehension::restriction_case(),
        unpacking::positional_unpacking_case(),
        unpacking::named_unpacking_case(),
        unpacking::tuple_unpacking_case(),
        resources::scoped_temporary_file_case(),
        resources::disposal_at_scope_end_case(),
        resources::lazy_instantiation_case(),
        rust_idioms::turbofish_case(),
        rust_idioms::labelled_block_values_case(),
        rust_idioms::at_bindings_case(),
        rust_idioms::shadowing_case(),
        rust_idioms::or_patterns_case(),
        rust_idioms::array_repetition_case(),
        rust_idioms::inclusive_ranges_case(),
        rust_idioms::ref_patterns_case(),
        rust_idioms::raw_identifiers_case(),
        rust_idioms::deref_coercion_case(),
        rust_idioms::mem_replace_and_swap_case(),
        rust_idioms::closure_capture_case(),
        rust_idioms::impl_trait_returns_case(),
        rust_idioms::if_as_expression_case(),
        rust_idioms::slice_patterns_case(),
        rust_idioms::match_guards_case(),
        rust_idioms::destructuring_case(),
    ]
}

/// The cases whose name matches `pattern`, still in declaration order.
pub fn matching(pattern: &Regex) -> Vec<ExampleCase> {
    all()
        .into_iter()
        .filter(|case| pattern.is_match(case.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_are_unique() {
        let cases = all();
        let names: HashSet<_> = cases.iter().map(|case| case.name).collect();

        assert_eq!(names.len(), cases.len());
    }

    #[test]
    fn every_case_is_described() {
        for case in all() {
            assert!(!case.description.is_empty(), "{} has no description", case.name);
        }
    }

    #[test]
    fn default_names_come_from_the_function() {
        assert_eq!(sets::set_difference_case().name, "set difference");
        assert_eq!(sets::set_difference_case().group, "sets");
        assert_eq!(
            sets::set_difference_case().description,
            "Members of the first set that are missing from the second."
        );
    }
}
