use std::io::{BufRead, Write};

use anyhow::Result;

use lifeboat_core::{EmbarkPort, PassengerInput, Sex, Title};

/// Walk the user through one submission of the form. Returns `None` when the
/// user quits or stdin closes. Empty answers take the defaults shown in
/// brackets; invalid answers re-prompt.
pub fn read_submission(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<PassengerInput>> {
    let defaults = PassengerInput::default();

    let Some(stratum) = ask(input, out, "Socioeconomic stratum (1-6) [3]: ", |s| {
        s.parse::<u8>().ok().filter(|v| (1..=6).contains(v))
    })?
    else {
        return Ok(None);
    };
    let stratum = stratum.unwrap_or(defaults.stratum);

    let Some(sex) = ask(input, out, "Sex (f = female, m = male) [f]: ", parse_sex)? else {
        return Ok(None);
    };
    let sex = sex.unwrap_or(defaults.sex);

    let Some(embarked) = ask(
        input,
        out,
        "Port of embarkation (C = Cherbourg, Q = Queenstown, S = Southampton) [C]: ",
        parse_port,
    )?
    else {
        return Ok(None);
    };
    let embarked = embarked.unwrap_or(defaults.embarked);

    let Some(fare) = ask(input, out, "Ticket fare in USD (0-600) [32]: ", |s| {
        s.parse::<f64>().ok().filter(|v| (0.0..=600.0).contains(v))
    })?
    else {
        return Ok(None);
    };
    let fare = fare.unwrap_or(defaults.fare);

    let Some(age) = ask(input, out, "Age (0-100) [25]: ", |s| {
        s.parse::<u8>().ok().filter(|v| *v <= 100)
    })?
    else {
        return Ok(None);
    };
    let age = age.unwrap_or(defaults.age);

    let Some(siblings_spouses) = ask(input, out, "Siblings/spouse aboard (0-10) [0]: ", |s| {
        s.parse::<u8>().ok().filter(|v| *v <= 10)
    })?
    else {
        return Ok(None);
    };
    let siblings_spouses = siblings_spouses.unwrap_or(defaults.siblings_spouses);

    let Some(parents_children) = ask(input, out, "Parents/children aboard (0-10) [0]: ", |s| {
        s.parse::<u8>().ok().filter(|v| *v <= 10)
    })?
    else {
        return Ok(None);
    };
    let parents_children = parents_children.unwrap_or(defaults.parents_children);

    // Only offer titles valid for the chosen sex, like the original form.
    let allowed = Title::allowed_for(sex);
    writeln!(out, "Title:")?;
    for (i, title) in allowed.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, title.label())?;
    }
    let Some(title) = ask(input, out, "Choose a title [1]: ", |s| {
        s.parse::<usize>()
            .ok()
            .filter(|v| (1..=allowed.len()).contains(v))
            .map(|v| allowed[v - 1])
    })?
    else {
        return Ok(None);
    };
    let title = title.unwrap_or(allowed[0]);

    Ok(Some(PassengerInput {
        stratum,
        sex,
        embarked,
        fare,
        age,
        siblings_spouses,
        parents_children,
        title,
    }))
}

/// Prompt until the parser accepts the answer. Outer `None` means quit/EOF;
/// inner `None` means the user took the default.
fn ask<T>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<Option<T>>> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim();
        if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        if answer.is_empty() {
            return Ok(Some(None));
        }
        match parse(answer) {
            Some(v) => return Ok(Some(Some(v))),
            None => writeln!(out, "  not a valid answer, try again (or q to quit)")?,
        }
    }
}

fn parse_sex(s: &str) -> Option<Sex> {
    match s.to_ascii_lowercase().as_str() {
        "f" | "female" => Some(Sex::Female),
        "m" | "male" => Some(Sex::Male),
        _ => None,
    }
}

fn parse_port(s: &str) -> Option<EmbarkPort> {
    match s.to_ascii_uppercase().as_str() {
        "C" => Some(EmbarkPort::C),
        "Q" => Some(EmbarkPort::Q),
        "S" => Some(EmbarkPort::S),
        _ => None,
    }
}
