//! Interactive session
//!
//! Owns the catalog and cart for the lifetime of the process and drives them from text
//! commands, one per line. Store mutations finish before the next command is read; the only
//! awaits are the two outbound calls.

use std::io::{BufRead, Write};

use pawmate::{
    cart::Cart,
    catalog::PetCatalog,
    display::{DisplayItem, FeaturedImage, availability_label, home_items},
    pets::{Pet, PetId},
    receipt::{ReceiptError, format_price, write_cart},
    validation::PetForm,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    context::AppContext,
    flows::{AddPetError, AddPetFlow, FeaturedFlow},
};

pub mod command;

pub use command::{Command, CommandError, FEATURED_TARGET, HELP};

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("session i/o failed")]
    Io(#[from] std::io::Error),

    /// The cart receipt could not be written.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),
}

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Read the next command.
    Continue,

    /// Stop reading.
    Quit,
}

/// A single storefront session.
#[derive(Debug)]
pub struct Session {
    catalog: PetCatalog,
    cart: Cart,
    add_pet: AddPetFlow,
    featured_flow: FeaturedFlow,
    featured: Option<FeaturedImage>,
}

impl Session {
    /// Start a session with a seeded catalog and an empty cart.
    pub fn new(context: &AppContext) -> Self {
        Self::with_flows(context.add_pet_flow(), context.featured_flow())
    }

    /// Start a session using the given flows.
    pub fn with_flows(add_pet: AddPetFlow, featured_flow: FeaturedFlow) -> Self {
        let mut catalog = PetCatalog::seeded();
        let mut cart = Cart::new();

        catalog.subscribe(|pets| debug!(pets = pets.len(), "catalog changed"));
        cart.subscribe(|lines| debug!(lines = lines.len(), "cart changed"));

        Self {
            catalog,
            cart,
            add_pet,
            featured_flow,
            featured: None,
        }
    }

    /// The catalog.
    pub fn catalog(&self) -> &PetCatalog {
        &self.catalog
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The currently shown featured image, once loaded.
    pub fn featured(&self) -> Option<&FeaturedImage> {
        self.featured.as_ref()
    }

    /// Load the featured image, then execute commands from `input` until it ends or `quit`.
    ///
    /// Lines that fail to parse are reported and skipped. Blank lines and lines starting with
    /// `#` are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub async fn run(
        &mut self,
        input: impl BufRead,
        mut out: impl Write,
    ) -> Result<(), SessionError> {
        self.refresh_featured().await;

        writeln!(out, "Paw-Mate, type `help` for commands")?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command, &mut out).await? == Outcome::Quit {
                        break;
                    }
                }
                Err(error) => writeln!(out, "{error}")?,
            }
        }

        info!(
            pets = self.catalog.len(),
            cart_items = self.cart.item_count(),
            "session ended"
        );

        Ok(())
    }

    /// Execute one command, writing its output to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub async fn execute(
        &mut self,
        command: Command,
        out: &mut impl Write,
    ) -> Result<Outcome, SessionError> {
        match command {
            Command::Help => writeln!(out, "{HELP}")?,
            Command::List => self.write_home(out).await?,
            Command::Featured => {
                self.refresh_featured().await;

                if let Some(featured) = &self.featured {
                    write_featured(out, featured)?;
                }
            }
            Command::AddPet { form, image } => self.submit_pet(out, &form, image).await?,
            Command::RemovePet(id) => {
                self.catalog.remove(&id);

                writeln!(out, "{}", availability_label(self.catalog.len()))?;
            }
            Command::ShowCart => write_cart(&self.cart, &mut *out)?,
            Command::CartAdd(target) => self.add_to_cart(out, &target)?,
            Command::CartIncrease(id) => {
                self.cart.increase(&id);
                write_cart(&self.cart, &mut *out)?;
            }
            Command::CartDecrease(id) => {
                self.cart.decrease(&id);
                write_cart(&self.cart, &mut *out)?;
            }
            Command::CartRemove(id) => {
                self.cart.remove_item(&id);
                write_cart(&self.cart, &mut *out)?;
            }
            Command::Total => writeln!(
                out,
                "Items: {}  Total: {}",
                self.cart.item_count(),
                format_price(self.cart.total_price())
            )?,
            Command::Quit => return Ok(Outcome::Quit),
        }

        Ok(Outcome::Continue)
    }

    async fn refresh_featured(&mut self) {
        self.featured = Some(self.featured_flow.load().await);
    }

    async fn write_home(&mut self, out: &mut impl Write) -> Result<(), SessionError> {
        if self.featured.is_none() {
            self.refresh_featured().await;
        }

        writeln!(
            out,
            "Paw-Mate: {} (cart: {})",
            availability_label(self.catalog.len()),
            self.cart.item_count()
        )?;

        let Some(featured) = &self.featured else {
            return Ok(());
        };

        for item in home_items(featured, self.catalog.list()) {
            match &item {
                DisplayItem::FeaturedPlaceholder(featured) => write_featured(out, featured)?,
                DisplayItem::RealPet(pet) => write_pet(out, pet, self.cart.contains(&pet.id))?,
            }
        }

        if self.catalog.is_empty() {
            writeln!(out, "No pets yet. Add a pet or fetch a random dog image")?;
        }

        Ok(())
    }

    async fn submit_pet(
        &mut self,
        out: &mut impl Write,
        form: &PetForm,
        image: Option<String>,
    ) -> Result<(), SessionError> {
        match self.add_pet.submit(&mut self.catalog, form, image).await {
            Ok(pet) => writeln!(out, "Pet added successfully! [{}] {}", pet.id, pet.name)?,
            Err(AddPetError::Validation(errors)) => {
                for (field, error) in errors.iter() {
                    writeln!(out, "  {field}: {}", error.message(field))?;
                }
            }
            Err(error @ AddPetError::Submission(_)) => {
                writeln!(out, "Error: {}", error.user_message())?;
            }
        }

        Ok(())
    }

    fn add_to_cart(&mut self, out: &mut impl Write, target: &str) -> Result<(), SessionError> {
        let Some(item) = self.select(target) else {
            writeln!(out, "No pet with id {target}")?;

            return Ok(());
        };

        match item.pet() {
            Some(pet) => {
                self.cart.add_item(pet);

                writeln!(out, "Added to cart!")?;
            }
            None => writeln!(out, "The featured pet is just for show and can't be adopted")?,
        }

        Ok(())
    }

    fn select(&self, target: &str) -> Option<DisplayItem> {
        if target == FEATURED_TARGET {
            return self.featured.clone().map(DisplayItem::FeaturedPlaceholder);
        }

        self.catalog
            .get(&PetId::from(target))
            .cloned()
            .map(DisplayItem::RealPet)
    }
}

fn write_featured(out: &mut impl Write, featured: &FeaturedImage) -> std::io::Result<()> {
    let note = if featured.fallback {
        " (fallback image)"
    } else {
        ""
    };

    writeln!(
        out,
        "  [featured] {} {}{note}",
        featured.caption, featured.image
    )
}

fn write_pet(out: &mut impl Write, pet: &Pet, in_cart: bool) -> std::io::Result<()> {
    let badge = if in_cart { " (in cart)" } else { "" };

    writeln!(
        out,
        "  [{}] {} - {}, {} yrs, {}{badge}",
        pet.id,
        pet.name,
        pet.breed,
        pet.age,
        format_price(pet.price)
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;

    use crate::{
        api::{FetchError, MockImagesApi, MockPetsApi, SubmissionError},
        flows::FALLBACK_IMAGE,
    };

    use super::*;

    fn images_ok() -> MockImagesApi {
        let mut api = MockImagesApi::new();

        api.expect_random_image()
            .returning(|| Ok("https://example.com/featured.jpg".to_string()));

        api
    }

    fn session(pets: MockPetsApi, images: MockImagesApi) -> Session {
        Session::with_flows(
            AddPetFlow::new(Arc::new(pets)),
            FeaturedFlow::new(Arc::new(images)),
        )
    }

    async fn run(session: &mut Session, script: &str) -> Result<String, Box<dyn std::error::Error>> {
        let mut out = Vec::new();

        session.run(script.as_bytes(), &mut out).await?;

        Ok(String::from_utf8(out)?)
    }

    #[tokio::test]
    async fn list_shows_featured_then_catalog() -> TestResult {
        let mut session = session(MockPetsApi::new(), images_ok());

        let output = run(&mut session, "list\n").await?;

        let featured = output.find("[featured]").ok_or("featured entry missing")?;
        let buddy = output.find("[1] Buddy").ok_or("seed pet missing")?;

        assert!(featured < buddy, "featured should come first:\n{output}");
        assert!(output.contains("1 pet available"), "{output}");

        Ok(())
    }

    #[tokio::test]
    async fn adopting_featured_is_refused() -> TestResult {
        let mut session = session(MockPetsApi::new(), images_ok());

        let output = run(&mut session, "cart add featured\n").await?;

        assert!(output.contains("can't be adopted"), "{output}");
        assert!(session.cart().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn cart_commands_update_quantities() -> TestResult {
        let mut session = session(MockPetsApi::new(), images_ok());

        run(
            &mut session,
            "cart add 1\ncart add 1\ncart inc 1\ncart dec 1\ncart inc missing\n",
        )
        .await?;

        let line = session.cart().get(&PetId::new("1")).ok_or("missing line")?;

        assert_eq!(line.quantity(), 2);
        assert_eq!(session.cart().item_count(), 2);

        run(&mut session, "cart remove 1\ncart remove 1\n").await?;

        assert!(session.cart().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn added_pet_can_be_adopted() -> TestResult {
        let mut pets = MockPetsApi::new();

        pets.expect_submit_pet().times(1).returning(|_| Ok(()));

        let mut session = session(pets, images_ok());

        let output = run(&mut session, "add Luna | Husky | 2 | 750\n").await?;

        assert!(output.contains("Pet added successfully!"), "{output}");
        assert_eq!(session.catalog().len(), 2);

        let luna = session
            .catalog()
            .list()
            .last()
            .ok_or("missing pet")?
            .id
            .clone();

        run(&mut session, &format!("cart add {luna}\ntotal\n")).await?;

        assert!(session.cart().contains(&luna));

        Ok(())
    }

    #[tokio::test]
    async fn invalid_add_reports_each_field() -> TestResult {
        let mut pets = MockPetsApi::new();

        pets.expect_submit_pet().times(0);

        let mut session = session(pets, images_ok());

        let output = run(&mut session, "add A | | x | -5\n").await?;

        assert!(output.contains("petName: Name must be at least 2 characters"), "{output}");
        assert!(output.contains("breed: Breed is required"), "{output}");
        assert!(output.contains("age: Age must be a number"), "{output}");
        assert!(output.contains("price: Price must be positive"), "{output}");
        assert_eq!(session.catalog().len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn failed_submission_shows_banner() -> TestResult {
        let mut pets = MockPetsApi::new();

        pets.expect_submit_pet().returning(|_| {
            Err(SubmissionError::Rejected {
                status: 401,
                message: Some("Missing API key".to_string()),
            })
        });

        let mut session = session(pets, images_ok());

        let output = run(&mut session, "add Luna | Husky | 2 | 750\n").await?;

        assert!(output.contains("Error: Missing API key"), "{output}");
        assert_eq!(session.catalog().len(), 1);
        assert!(session.cart().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn failed_image_fetch_uses_fallback_silently() -> TestResult {
        let mut images = MockImagesApi::new();

        images
            .expect_random_image()
            .returning(|| Err(FetchError::MissingImage));

        let mut session = session(MockPetsApi::new(), images);

        let output = run(&mut session, "list\n").await?;

        let featured = session.featured().ok_or("featured not loaded")?;

        assert_eq!(featured.image, FALLBACK_IMAGE);
        assert!(featured.fallback);
        assert!(!output.contains("Error"), "{output}");
        assert_eq!(session.catalog().len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn quit_stops_reading() -> TestResult {
        let mut session = session(MockPetsApi::new(), images_ok());

        run(&mut session, "quit\ncart add 1\n").await?;

        assert!(session.cart().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn bad_lines_are_reported_and_skipped() -> TestResult {
        let mut session = session(MockPetsApi::new(), images_ok());

        let output = run(&mut session, "# comment\n\nadopt 1\ncart add 1\n").await?;

        assert!(output.contains("unknown command `adopt`"), "{output}");
        assert_eq!(session.cart().len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn removing_catalog_pet_keeps_cart_line() -> TestResult {
        let mut session = session(MockPetsApi::new(), images_ok());

        run(&mut session, "cart add 1\nremove 1\n").await?;

        assert!(session.catalog().is_empty());
        assert!(session.cart().contains(&PetId::new("1")));

        Ok(())
    }
}
