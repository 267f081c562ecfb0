//! Password generation.

use rand::Rng;
use rand::seq::SliceRandom;

use super::{Alphabet, GenerationRequest, MAX_LENGTH, Password};
use crate::error::InvalidRequest;

/// Generate a password using the thread-local, OS-seeded RNG.
pub fn generate(request: &GenerationRequest) -> Result<Password, InvalidRequest> {
    generate_with(request, &mut rand::rng())
}

/// Generate a password from an injected RNG.
///
/// One character from each selected class comes first, the rest of the
/// length is filled from the whole alphabet, then the buffer is shuffled so
/// the guaranteed characters land in random positions. When `length` is
/// shorter than the number of selected classes, only the first `length`
/// guaranteed characters are kept, in selection order. Lengths above
/// [`MAX_LENGTH`] are rejected before anything is allocated.
pub fn generate_with<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Password, InvalidRequest> {
    let length = request.length;
    if length > MAX_LENGTH {
        return Err(InvalidRequest::Length(length.to_string()));
    }
    let alphabet = Alphabet::build(request)?;

    let mut buf = Vec::with_capacity(length);
    buf.extend(
        alphabet
            .classes()
            .iter()
            .take(length)
            .map(|class| class.pick(rng)),
    );

    if buf.len() < alphabet.classes().len() {
        log::trace!(
            "length {} below {} selected classes, keeping seeded prefix",
            length,
            alphabet.classes().len()
        );
        return Ok(Password::from_ascii(buf));
    }

    buf.extend((buf.len()..length).map(|_| alphabet.pick(rng)));
    buf.shuffle(rng);

    log::trace!("generated {} chars from {}-char alphabet", buf.len(), alphabet.size());
    Ok(Password::from_ascii(buf))
}
