//! HTML for each page of the game flow.
//!
//! Plain `format!` templating: one function per page, all wrapped in a
//! shared shell. Error strings come from [`crate::input::InputError`]
//! Display impls; no user-typed text is ever echoed back.

use crate::dice_mechanics::DiceRoll;
use crate::probability::ProbabilityResult;

fn shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; max-width: 40em; margin: 3em auto; }}\n\
         .error {{ color: #b00020; }}\n\
         .dice {{ font-size: 1.4em; letter-spacing: 0.3em; }}\n\
         </style>\n</head>\n<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n"
    )
}

fn yes_no_form(action: &str, prompt: &str) -> String {
    format!(
        "<p>{prompt}</p>\n\
         <form method=\"post\" action=\"{action}\">\n\
         <button name=\"choice\" value=\"Yes\">Yes</button>\n\
         <button name=\"choice\" value=\"No\">No</button>\n\
         </form>"
    )
}

fn error_line(error: Option<&str>) -> String {
    match error {
        Some(msg) => format!("<p class=\"error\">{msg}</p>\n"),
        None => String::new(),
    }
}

pub fn index() -> String {
    shell(
        "Dice Odds",
        &yes_no_form("/start", "Want to roll some dice?"),
    )
}

pub fn goodbye() -> String {
    shell(
        "Goodbye",
        "<p>Thanks for playing!</p>\n<p><a href=\"/\">Start over</a></p>",
    )
}

pub fn ask_dice_count(error: Option<&str>) -> String {
    let body = format!(
        "{}<form method=\"post\" action=\"/set-dice-count\">\n\
         <label>How many dice would you like to roll?\n\
         <input name=\"dice_count\" autofocus></label>\n\
         <button>Continue</button>\n\
         </form>",
        error_line(error)
    );
    shell("Number of dice", &body)
}

pub fn ask_target_sum() -> String {
    shell(
        "Target sum",
        &yes_no_form(
            "/handle-target-sum",
            "Do you have a target sum in mind? (No rolls the dice for you.)",
        ),
    )
}

pub fn ask_target_sum_value(dice_count: u32, min: u32, max: u32, error: Option<&str>) -> String {
    let body = format!(
        "{}<form method=\"post\" action=\"/show-probability\">\n\
         <label>What sum are you hoping for with {dice_count} dice?\n\
         It must be between {min} and {max}.\n\
         <input name=\"target_sum\" autofocus></label>\n\
         <button>Show probability</button>\n\
         </form>",
        error_line(error)
    );
    shell("Target sum", &body)
}

fn probability_block(dice_count: u32, target_sum: u32, res: &ProbabilityResult) -> String {
    format!(
        "<p>With {dice_count} dice there are {ways} ways to roll a sum of \
         {target_sum}, out of {total} possible outcomes.</p>\n\
         <p>That is a probability of <strong>{prob:.6}</strong> \
         ({ways} / {total}).</p>",
        ways = res.ways_display,
        total = res.total_display,
        prob = res.probability,
    )
}

pub fn show_probability(dice_count: u32, target_sum: u32, res: &ProbabilityResult) -> String {
    let body = format!(
        "{}\n{}",
        probability_block(dice_count, target_sum, res),
        yes_no_form("/play-again", "Play again?"),
    );
    shell("Your odds", &body)
}

pub fn roll_result(dice_count: u32, roll: &DiceRoll, res: &ProbabilityResult) -> String {
    let faces = roll
        .results
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let body = format!(
        "<p class=\"dice\">{faces}</p>\n\
         <p>You rolled a total of <strong>{sum}</strong>.</p>\n\
         {}\n{}",
        probability_block(dice_count, roll.sum, res),
        yes_no_form("/play-again", "Play again?"),
        sum = roll.sum,
    );
    shell("Your roll", &body)
}
