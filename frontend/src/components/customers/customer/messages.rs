use common::debounce::Ticket;
use common::error::FormError;
use common::form::{FieldEdit, TextField};

pub enum Msg {
    Edit(FieldEdit),
    Blur(TextField),
    BlurPhone,
    BlurRating,
    /// The email debounce timer for `Ticket` elapsed.
    EmailSettled(Ticket),
    AddAddress,
    PopulateTestData,
    Save,
    /// A DOM value that could not be mapped onto the form.
    Rejected(FormError),
}
