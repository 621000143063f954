//! Interactive Shell
//!
//! Textual menu loop over the hotel service. One flow per menu option;
//! bad input aborts the current flow with a message and returns to the
//! menu, never crashes it.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use dialoguer::Input;

use innkeep::{DomainError, PaymentGateway, ReservationRepository};

use crate::application::{BookingOutcome, HotelService};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Run the menu loop until the user picks exit
pub fn run<R, P>(hotel: &mut HotelService<R, P>) -> Result<()>
where
    R: ReservationRepository,
    P: PaymentGateway,
{
    loop {
        print_menu();

        let choice: String = Input::new()
            .with_prompt("Choice")
            .interact_text()
            .context("Failed to read menu choice")?;

        match choice.trim() {
            "1" => search(hotel),
            "2" => book(hotel)?,
            "3" => cancel(hotel)?,
            "4" => view(hotel),
            "5" => {
                println!("Goodbye.");
                return Ok(());
            }
            other => {
                println!("{} Invalid choice '{}'. Pick 1-5.", "✗".red(), other);
            }
        }
    }
}

fn print_menu() {
    println!();
    println!("{}", "Innkeep".bold());
    println!("  1. Search available rooms");
    println!("  2. Book a room");
    println!("  3. Cancel a reservation");
    println!("  4. View reservations");
    println!("  5. Exit");
}

fn search<R: ReservationRepository, P: PaymentGateway>(hotel: &HotelService<R, P>) {
    let rooms = hotel.available_rooms();

    if rooms.is_empty() {
        println!("No available rooms.");
        return;
    }

    println!("{}", "Available rooms:".bold());
    for room in rooms {
        println!(
            "  {} {} (${:.2}/night)",
            room.number.to_string().cyan(),
            room.category,
            room.nightly_price
        );
    }
}

fn book<R: ReservationRepository, P: PaymentGateway>(hotel: &mut HotelService<R, P>) -> Result<()> {
    let room_input: String = Input::new()
        .with_prompt("Room number")
        .interact_text()
        .context("Failed to read room number")?;
    let room_number: u32 = match room_input.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            println!("{} Room number must be an integer.", "✗".red());
            return Ok(());
        }
    };

    let customer_name: String = Input::new()
        .with_prompt("Customer name")
        .interact_text()
        .context("Failed to read customer name")?;

    let start_date = match prompt_date("Start date (YYYY-MM-DD)")? {
        Some(date) => date,
        None => return Ok(()),
    };
    let end_date = match prompt_date("End date (YYYY-MM-DD)")? {
        Some(date) => date,
        None => return Ok(()),
    };

    match hotel.book(room_number, customer_name, start_date, end_date) {
        Ok(BookingOutcome::Confirmed { reservation, total }) => {
            println!(
                "{} Room {} booked: reservation {}, {} night(s), ${:.2}.",
                "✓".green(),
                reservation.room_number,
                reservation.id,
                reservation.nights(),
                total
            );
        }
        Ok(BookingOutcome::RoomUnavailable) => {
            println!("{} Room {} is not available.", "✗".red(), room_number);
        }
        Ok(BookingOutcome::PaymentDeclined { total }) => {
            println!(
                "{} Payment of ${:.2} declined. Booking not completed.",
                "✗".red(),
                total
            );
        }
        Err(DomainError::NotFound { .. }) => {
            println!("{} Room {} not found.", "✗".red(), room_number);
        }
        Err(DomainError::Validation(message)) => {
            println!("{} {}", "✗".red(), message);
        }
        Err(e) => {
            println!("{} Booking failed: {}", "✗".red(), e);
        }
    }

    Ok(())
}

fn cancel<R: ReservationRepository, P: PaymentGateway>(
    hotel: &mut HotelService<R, P>,
) -> Result<()> {
    let id_input: String = Input::new()
        .with_prompt("Reservation ID")
        .interact_text()
        .context("Failed to read reservation id")?;
    let reservation_id: u32 = match id_input.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            println!("{} Reservation ID must be an integer.", "✗".red());
            return Ok(());
        }
    };

    match hotel.cancel(reservation_id) {
        Ok(removed) => {
            println!(
                "{} Reservation {} cancelled; room {} is available again.",
                "✓".green(),
                removed.id,
                removed.room_number
            );
        }
        Err(DomainError::NotFound { .. }) => {
            println!("{} Reservation {} not found.", "✗".red(), reservation_id);
        }
        Err(e) => {
            println!("{} Cancellation failed: {}", "✗".red(), e);
        }
    }

    Ok(())
}

fn view<R: ReservationRepository, P: PaymentGateway>(hotel: &HotelService<R, P>) {
    let mut any = false;

    for reservation in hotel.reservations() {
        if !any {
            println!("{}", "Reservations:".bold());
            any = true;
        }
        println!(
            "  {} room {} for {} ({} to {})",
            format!("#{}", reservation.id).cyan(),
            reservation.room_number,
            reservation.customer_name,
            reservation.start_date,
            reservation.end_date
        );
    }

    if !any {
        println!("No reservations.");
    }
}

/// Prompt for a date; `None` means the input was malformed and the current
/// flow should be aborted
fn prompt_date(prompt: &str) -> Result<Option<NaiveDate>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .interact_text()
        .context("Failed to read date")?;

    match parse_date(input.trim()) {
        Ok(date) => Ok(Some(date)),
        Err(_) => {
            println!("{} Invalid date format. Please use YYYY-MM-DD.", "✗".red());
            Ok(None)
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hyphenated_dates() {
        assert_eq!(
            parse_date("2024-01-04").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()
        );
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_date("04/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("2024-01-32").is_err());
        assert!(parse_date("next tuesday").is_err());
        assert!(parse_date("").is_err());
    }
}
