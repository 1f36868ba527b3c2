//! Session commands.

use std::str::FromStr;

use pawmate::{
    pets::PetId,
    validation::{FormValue, PetForm},
};
use thiserror::Error;

/// Target name that selects the featured entry.
pub const FEATURED_TARGET: &str = "featured";

pub(crate) const ADD_USAGE: &str = "add <name> | <breed> | <age> | <price> [| <image>]";

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  list                                          show the featured entry and every pet
  featured | refresh                            fetch a new featured image
  add <name> | <breed> | <age> | <price> [| <image>]
                                                submit and list a new pet
  remove <id>                                   remove a pet from the catalog
  cart                                          show the cart
  cart add <id|featured>                        add a pet to the cart
  cart inc <id>                                 increase a pet's quantity
  cart dec <id>                                 decrease a pet's quantity
  cart remove <id>                              remove a pet from the cart
  total                                         show item count and total price
  help                                          show this help
  quit                                          end the session";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the command list.
    Help,

    /// Show the home list.
    List,

    /// Fetch a new featured image.
    Featured,

    /// Submit and list a new pet.
    AddPet {
        /// Raw form input
        form: PetForm,

        /// Chosen image, if any
        image: Option<String>,
    },

    /// Remove a pet from the catalog.
    RemovePet(PetId),

    /// Show the cart.
    ShowCart,

    /// Add the selected entry to the cart.
    CartAdd(String),

    /// Increase a line's quantity.
    CartIncrease(PetId),

    /// Decrease a line's quantity.
    CartDecrease(PetId),

    /// Remove a line from the cart.
    CartRemove(PetId),

    /// Show item count and total price.
    Total,

    /// End the session.
    Quit,
}

/// A line that could not be parsed into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line has no command.
    #[error("empty command")]
    Empty,

    /// The command is not recognised.
    #[error("unknown command `{0}`, type `help` for a list of commands")]
    Unknown(String),

    /// A command is missing its argument.
    #[error("usage: {0}")]
    Usage(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();

        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match name {
            "help" | "?" => Ok(Self::Help),
            "list" | "ls" => Ok(Self::List),
            "featured" | "refresh" => Ok(Self::Featured),
            "add" => parse_add(rest),
            "remove" | "rm" => pet_id(rest, "remove <id>").map(Self::RemovePet),
            "cart" => parse_cart(rest),
            "total" => Ok(Self::Total),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_add(rest: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = rest.split('|').map(str::trim).collect();

    let (name, breed, age, price, image) = match parts.as_slice() {
        [name, breed, age, price] => (*name, *breed, *age, *price, None),
        [name, breed, age, price, image] => (*name, *breed, *age, *price, Some(*image)),
        _ => return Err(CommandError::Usage(ADD_USAGE)),
    };

    Ok(Command::AddPet {
        form: PetForm {
            pet_name: Some(name.to_string()),
            breed: Some(breed.to_string()),
            age: Some(FormValue::from(age)),
            price: Some(FormValue::from(price)),
        },
        image: image
            .filter(|image| !image.is_empty())
            .map(str::to_string),
    })
}

fn parse_cart(rest: &str) -> Result<Command, CommandError> {
    if rest.is_empty() {
        return Ok(Command::ShowCart);
    }

    let (action, target) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let target = target.trim();

    match action {
        "add" if !target.is_empty() => Ok(Command::CartAdd(target.to_string())),
        "add" => Err(CommandError::Usage("cart add <id|featured>")),
        "inc" | "increase" => pet_id(target, "cart inc <id>").map(Command::CartIncrease),
        "dec" | "decrease" => pet_id(target, "cart dec <id>").map(Command::CartDecrease),
        "remove" | "rm" => pet_id(target, "cart remove <id>").map(Command::CartRemove),
        other => Err(CommandError::Unknown(format!("cart {other}"))),
    }
}

fn pet_id(value: &str, usage: &'static str) -> Result<PetId, CommandError> {
    if value.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(PetId::new(value))
    }
}
