//! Form draft: the not-yet-persisted text of the add/edit form.
//!
//! Every input is held as the raw string the user typed so the form can be
//! re-rendered exactly as entered after a failed validation. Conversion into
//! a typed [`StudentFields`] happens in [`crate::validate`].

use crate::models::StudentFields;

/// One input of the student form, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    MiddleName,
    LastName,
    Gender,
    Dob,
    ContactNumber,
    Email,
    Address,
    Class,
    Section,
    RollNumber,
    AdmissionDate,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::FirstName,
        Field::MiddleName,
        Field::LastName,
        Field::Gender,
        Field::Dob,
        Field::ContactNumber,
        Field::Email,
        Field::Address,
        Field::Class,
        Field::Section,
        Field::RollNumber,
        Field::AdmissionDate,
    ];

    /// Document key, also used as the HTML input name.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::MiddleName => "middleName",
            Field::LastName => "lastName",
            Field::Gender => "gender",
            Field::Dob => "dob",
            Field::ContactNumber => "contactNumber",
            Field::Email => "email",
            Field::Address => "address",
            Field::Class => "class",
            Field::Section => "section",
            Field::RollNumber => "rollNumber",
            Field::AdmissionDate => "admissionDate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::MiddleName => "Middle Name",
            Field::LastName => "Last Name",
            Field::Gender => "Gender",
            Field::Dob => "Date of Birth",
            Field::ContactNumber => "Contact Number",
            Field::Email => "Email",
            Field::Address => "Address",
            Field::Class => "Class",
            Field::Section => "Section",
            Field::RollNumber => "Roll Number",
            Field::AdmissionDate => "Admission Date",
        }
    }

    /// HTML input type for the form control.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Dob | Field::AdmissionDate => "date",
            Field::ContactNumber | Field::RollNumber => "number",
            Field::Email => "email",
            _ => "text",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: String,
    pub dob: String,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub class: String,
    pub section: String,
    pub roll_number: String,
    pub admission_date: String,
}

impl StudentDraft {
    /// Pre-fill a draft from a stored document (edit mode).
    pub fn from_fields(fields: &StudentFields) -> Self {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            first_name: fields.first_name.clone(),
            middle_name: opt(&fields.middle_name),
            last_name: fields.last_name.clone(),
            gender: fields.gender.map(|g| g.to_string()).unwrap_or_default(),
            dob: fields.dob.map(|d| d.to_string()).unwrap_or_default(),
            contact_number: fields.contact_number.clone(),
            email: fields.email.clone(),
            address: opt(&fields.address),
            class: fields.class.clone(),
            section: fields.section.clone(),
            roll_number: fields.roll_number.clone(),
            admission_date: fields
                .admission_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        self.slot(field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    fn slot(&self, field: Field) -> &String {
        match field {
            Field::FirstName => &self.first_name,
            Field::MiddleName => &self.middle_name,
            Field::LastName => &self.last_name,
            Field::Gender => &self.gender,
            Field::Dob => &self.dob,
            Field::ContactNumber => &self.contact_number,
            Field::Email => &self.email,
            Field::Address => &self.address,
            Field::Class => &self.class,
            Field::Section => &self.section,
            Field::RollNumber => &self.roll_number,
            Field::AdmissionDate => &self.admission_date,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::MiddleName => &mut self.middle_name,
            Field::LastName => &mut self.last_name,
            Field::Gender => &mut self.gender,
            Field::Dob => &mut self.dob,
            Field::ContactNumber => &mut self.contact_number,
            Field::Email => &mut self.email,
            Field::Address => &mut self.address,
            Field::Class => &mut self.class,
            Field::Section => &mut self.section,
            Field::RollNumber => &mut self.roll_number,
            Field::AdmissionDate => &mut self.admission_date,
        }
    }
}
