// BayLog - app/intake.rs
//
// Intake form state: the editable fields behind the "Insert" bar.
//
// Operator autofill policy lives here, not in the store: selecting a bay
// copies that bay's default operators into the form only while the
// operators field is still empty, so typed names are never overwritten.

use crate::core::catalog::Category;
use crate::core::model::{Bay, BayDefaults, CategoryChoice, NewWash};
use crate::util::constants::DATE_FORMAT;
use crate::util::error::StoreError;
use chrono::NaiveDate;

/// Editable intake fields.
#[derive(Debug, Clone)]
pub struct IntakeForm {
    /// Bay that the next insert goes into.
    pub bay: Bay,
    pub plate: String,
    pub brand: CategoryChoice,
    pub color: CategoryChoice,
    pub wash_type: CategoryChoice,
    /// Date text as typed (`YYYY-MM-DD`). Blank = today.
    pub date: String,
    /// Operator names, pre-filled from the bay default.
    pub operators: String,
}

impl IntakeForm {
    /// Fresh form for `bay`, dated `today`, with catalogue defaults.
    pub fn new(bay: Bay, today: NaiveDate, defaults: &BayDefaults) -> Self {
        Self {
            bay,
            plate: String::new(),
            brand: CategoryChoice::pick(Category::Brand.default_value()),
            color: CategoryChoice::pick(Category::Color.default_value()),
            wash_type: CategoryChoice::pick(Category::WashType.default_value()),
            date: today.format(DATE_FORMAT).to_string(),
            operators: defaults.get(bay).to_string(),
        }
    }

    /// Mutable access to one category choice.
    pub fn category_mut(&mut self, category: Category) -> &mut CategoryChoice {
        match category {
            Category::Brand => &mut self.brand,
            Category::Color => &mut self.color,
            Category::WashType => &mut self.wash_type,
        }
    }

    /// Switch to `bay`, autofilling operators if the field is empty.
    pub fn select_bay(&mut self, bay: Bay, defaults: &BayDefaults) {
        self.bay = bay;
        if self.operators.trim().is_empty() {
            self.operators = defaults.get(bay).to_string();
        }
    }

    /// A bay default was just edited; mirror it if it is the selected bay
    /// and nothing has been typed yet.
    pub fn on_default_changed(&mut self, bay: Bay, operators: &str) {
        if bay == self.bay && self.operators.trim().is_empty() {
            self.operators = operators.to_string();
        }
    }

    /// Build the store payload. Fails only on an unparseable date; a blank
    /// plate is left for the store to reject.
    pub fn to_new_wash(&self) -> Result<NewWash, StoreError> {
        let date_text = self.date.trim();
        let date = if date_text.is_empty() {
            None
        } else {
            let parsed = NaiveDate::parse_from_str(date_text, DATE_FORMAT).map_err(|_| {
                StoreError::InvalidDate {
                    input: date_text.to_string(),
                }
            })?;
            Some(parsed)
        };

        Ok(NewWash {
            bay: self.bay,
            plate: self.plate.clone(),
            brand: self.brand.clone(),
            color: self.color.clone(),
            wash_type: self.wash_type.clone(),
            date,
            operators: self.operators.clone(),
        })
    }

    /// Clear the vehicle fields after a successful insert.
    /// Bay, date and operators are kept for the next car.
    pub fn reset_after_insert(&mut self) {
        self.plate.clear();
        self.brand = CategoryChoice::pick(Category::Brand.default_value());
        self.color = CategoryChoice::pick(Category::Color.default_value());
        self.wash_type = CategoryChoice::pick(Category::WashType.default_value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn defaults() -> BayDefaults {
        let mut d = BayDefaults::default();
        d.set(Bay::new(2).unwrap(), "John,Doe");
        d.set(Bay::new(3).unwrap(), "Ann");
        d
    }

    #[test]
    fn test_new_form_prefills_default_and_today() {
        let form = IntakeForm::new(Bay::new(2).unwrap(), june(5), &defaults());
        assert_eq!(form.operators, "John,Doe");
        assert_eq!(form.date, "2025-06-05");
        assert_eq!(form.brand.value, "Toyota");
    }

    #[test]
    fn test_select_bay_autofills_only_empty_operators() {
        let defaults = defaults();
        let mut form = IntakeForm::new(Bay::first(), june(5), &defaults);
        assert_eq!(form.operators, "");

        form.select_bay(Bay::new(2).unwrap(), &defaults);
        assert_eq!(form.operators, "John,Doe");

        // Already filled: switching bays keeps what is there.
        form.select_bay(Bay::new(3).unwrap(), &defaults);
        assert_eq!(form.operators, "John,Doe");
        assert_eq!(form.bay, Bay::new(3).unwrap());

        form.operators.clear();
        form.select_bay(Bay::new(3).unwrap(), &defaults);
        assert_eq!(form.operators, "Ann");
    }

    #[test]
    fn test_default_change_mirrors_into_empty_field_of_selected_bay() {
        let mut form = IntakeForm::new(Bay::first(), june(5), &BayDefaults::default());
        form.on_default_changed(Bay::new(4).unwrap(), "Other bay");
        assert_eq!(form.operators, "");

        form.on_default_changed(Bay::first(), "Mo");
        assert_eq!(form.operators, "Mo");

        form.on_default_changed(Bay::first(), "Mo,Li");
        assert_eq!(form.operators, "Mo");
    }

    #[test]
    fn test_to_new_wash_parses_date() {
        let mut form = IntakeForm::new(Bay::first(), june(5), &BayDefaults::default());
        form.plate = "abc".to_string();
        assert_eq!(form.to_new_wash().unwrap().date, Some(june(5)));

        form.date = "  ".to_string();
        assert_eq!(form.to_new_wash().unwrap().date, None);

        form.date = "05/06/2025".to_string();
        assert!(matches!(
            form.to_new_wash(),
            Err(StoreError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_reset_keeps_bay_date_and_operators() {
        let mut form = IntakeForm::new(Bay::new(2).unwrap(), june(5), &defaults());
        form.plate = "ABC".to_string();
        *form.category_mut(Category::Color) = CategoryChoice::other("Teal");
        form.reset_after_insert();

        assert!(form.plate.is_empty());
        assert_eq!(form.color, CategoryChoice::pick("White"));
        assert_eq!(form.operators, "John,Doe");
        assert_eq!(form.date, "2025-06-05");
        assert_eq!(form.bay, Bay::new(2).unwrap());
    }
}
