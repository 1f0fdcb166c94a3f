//! astral_transforms: transform-support utilities over the node factory.
//!
//! Provides the binding-to-assignment pattern converter used by the
//! destructuring transforms and the module-info collector used by the module
//! transform passes.

pub mod module_info;
pub mod pattern;

pub use module_info::{
    collect_external_module_info, CollectorOptions, ExternalModuleInfo, ModuleInfoResolver,
    NullResolver, EXTERNAL_HELPERS_MODULE_NAME,
};
pub use pattern::{
    convert_to_array_assignment_element, convert_to_array_assignment_pattern,
    convert_to_assignment_element, convert_to_assignment_pattern,
    convert_to_object_assignment_element, convert_to_object_assignment_pattern,
    get_initializer_of_binding_or_assignment_element,
    get_property_name_of_binding_or_assignment_element,
    get_rest_indicator_of_binding_or_assignment_element,
    get_target_of_binding_or_assignment_element,
    try_get_property_name_of_binding_or_assignment_element,
};
