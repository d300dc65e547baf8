//! Deferred initialization of a struct field, in greeting-card form.
//!
//! The card is constructed before anyone has decided what the message says.
//! Reading the message too early is a typed error; the first write
//! initializes it; a second write under the default `Warn` policy overwrites
//! with an advisory on stderr; direct assignment through
//! `get_or_initialize` updates the payload without any policy involvement.

use initializable::Initializable;

struct Card {
    sender: String,
    receiver: String,
    message: Initializable<(String, String)>,
}

fn main() -> Result<(), initializable::Error> {
    let mut card = Card {
        sender: "Mom".into(),
        receiver: "Son".into(),
        message: Initializable::default(),
    };

    // The message was never written; extraction fails instead of handing
    // back an empty pair.
    if let Err(err) = card.message.get() {
        eprintln!("{err}");
    }

    card.message.initialize(("Harpy".into(), "Birthday!".into()))?;

    // Typo fix via re-initialization: the default Warn policy overwrites and
    // prints one advisory to stderr.
    card.message.initialize(("Happy".into(), "Birthday!".into()))?;

    // Updating an already-initialized value the sanctioned way: plain
    // assignment through the payload reference, no policy consulted.
    *card.message.get_or_initialize(None)? = ("HELLO".into(), "WORLD".into());

    let (first, second) = card.message.get()?;
    println!("To {} from {}: {first} {second}", card.receiver, card.sender);

    Ok(())
}
