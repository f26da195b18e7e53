use std::io::{self, BufRead, Write};

use forkcast_core::app::DecisionEngine;
use forkcast_core::domain::{DecisionError, ParticipantNames, Policy, SuggestionList};
use forkcast_core::ports::ThreadRngSource;

fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Re-prompt until the answer parses as a policy. Blank means random.
fn prompt_policy(input: &mut impl BufRead, message: &str) -> io::Result<Policy> {
    loop {
        let answer = prompt(input, message)?;
        if answer.is_empty() {
            return Ok(Policy::Random);
        }
        match answer.parse::<Policy>() {
            Ok(policy) => return Ok(policy),
            Err(e) => println!("{e}"),
        }
    }
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut engine = DecisionEngine::new(ThreadRngSource::new());

    // (A) Participants. Blank names fall back to placeholders.
    let name1 = prompt(&mut input, "First participant's name: ")?;
    let name2 = prompt(&mut input, "Second participant's name: ")?;
    let names = ParticipantNames::with_defaults(&name1, &name2);

    // (B) Cuisine round.
    let cuisines1 = SuggestionList::parse(&prompt(
        &mut input,
        "Cuisine suggestions, comma separated (first participant): ",
    )?);
    let cuisines2 = SuggestionList::parse(&prompt(
        &mut input,
        "Cuisine suggestions, comma separated (second participant): ",
    )?);
    let cuisine_policy = prompt_policy(&mut input, "Cuisine policy [random/serial]: ")?;

    let cuisine = match engine.decide_cuisine(&cuisines1, &cuisines2, cuisine_policy) {
        Ok(decision) => decision,
        Err(DecisionError::NoSuggestions) => {
            println!("Please enter at least one cuisine.");
            return Ok(());
        }
    };
    println!("{}", cuisine.outcome.describe(&names, "cuisine"));
    println!("Cuisine chosen: {}.", cuisine.session.cuisine);

    // (C) Restaurant round, threading the cuisine round's session state.
    let restaurants1 = SuggestionList::parse(&prompt(
        &mut input,
        "Restaurant suggestions, comma separated (first participant): ",
    )?);
    let restaurants2 = SuggestionList::parse(&prompt(
        &mut input,
        "Restaurant suggestions, comma separated (second participant): ",
    )?);
    let restaurant_policy = prompt_policy(&mut input, "Restaurant policy [random/serial]: ")?;

    let restaurant = match engine.decide_restaurant(
        &restaurants1,
        &restaurants2,
        restaurant_policy,
        &cuisine.session,
    ) {
        Ok(outcome) => outcome,
        Err(DecisionError::NoSuggestions) => {
            println!("Please enter at least one restaurant.");
            return Ok(());
        }
    };
    println!("{}", restaurant.describe(&names, "restaurant"));

    // (D) Machine-readable summary of the whole session.
    let summary = serde_json::json!({
        "cuisine": cuisine.outcome,
        "restaurant": restaurant,
        "session": cuisine.session,
    });
    println!("{summary:#}");

    Ok(())
}
