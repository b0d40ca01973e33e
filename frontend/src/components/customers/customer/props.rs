//! Properties of the `CustomerComponent`.

use common::config::FormOptions;
use common::model::customer::Customer;
use yew::prelude::*;

/// Properties for the `CustomerComponent`.
///
/// Both are read once, when the component is created; later changes from the
/// parent do not rebuild the form.
#[derive(Properties, PartialEq, Clone)]
pub struct CustomerProps {
    /// Debounce window and rating bounds. Defaults to 1000 ms and 1 to 5.
    #[prop_or_default]
    pub options: FormOptions,

    /// Seed values. `None` starts from an empty customer with one home address.
    #[prop_or_default]
    pub template: Option<Customer>,
}
