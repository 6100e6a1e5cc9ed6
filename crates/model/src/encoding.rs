//! Reduced (7-field) widget schema and its fixed categorical encodings.
//!
//! The widget maps each dropdown choice to an integer code locally and
//! hands the model a bare positional vector; no encoder metadata from the
//! artifact is involved on this path. Codes are service-level ordinals:
//! a larger code means more service (or a longer commitment).

/// Contract length dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Contract {
    #[default]
    MonthToMonth,
    OneYear,
    TwoYear,
}

impl Contract {
    pub fn name(self) -> &'static str {
        match self {
            Contract::MonthToMonth => "Month-to-month",
            Contract::OneYear => "One year",
            Contract::TwoYear => "Two year",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Contract::MonthToMonth => 0,
            Contract::OneYear => 1,
            Contract::TwoYear => 2,
        }
    }

    pub fn all() -> &'static [Contract] {
        &[Contract::MonthToMonth, Contract::OneYear, Contract::TwoYear]
    }

    pub fn next(self) -> Self {
        match self {
            Contract::MonthToMonth => Contract::OneYear,
            Contract::OneYear => Contract::TwoYear,
            Contract::TwoYear => Contract::MonthToMonth,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Contract::MonthToMonth => Contract::TwoYear,
            Contract::OneYear => Contract::MonthToMonth,
            Contract::TwoYear => Contract::OneYear,
        }
    }
}

/// Internet service dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InternetService {
    #[default]
    No,
    Dsl,
    FiberOptic,
}

impl InternetService {
    pub fn name(self) -> &'static str {
        match self {
            InternetService::No => "No",
            InternetService::Dsl => "DSL",
            InternetService::FiberOptic => "Fiber optic",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            InternetService::No => 0,
            InternetService::Dsl => 1,
            InternetService::FiberOptic => 2,
        }
    }

    pub fn all() -> &'static [InternetService] {
        &[
            InternetService::No,
            InternetService::Dsl,
            InternetService::FiberOptic,
        ]
    }

    pub fn next(self) -> Self {
        match self {
            InternetService::No => InternetService::Dsl,
            InternetService::Dsl => InternetService::FiberOptic,
            InternetService::FiberOptic => InternetService::No,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            InternetService::No => InternetService::FiberOptic,
            InternetService::Dsl => InternetService::No,
            InternetService::FiberOptic => InternetService::Dsl,
        }
    }
}

/// Yes/No/"No internet service" dropdown, used for both the online
/// security and tech support controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceOption {
    #[default]
    No,
    Yes,
    NoInternetService,
}

impl ServiceOption {
    pub fn name(self) -> &'static str {
        match self {
            ServiceOption::No => "No",
            ServiceOption::Yes => "Yes",
            ServiceOption::NoInternetService => "No internet service",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ServiceOption::No => 0,
            ServiceOption::Yes => 1,
            ServiceOption::NoInternetService => 2,
        }
    }

    pub fn all() -> &'static [ServiceOption] {
        &[
            ServiceOption::No,
            ServiceOption::Yes,
            ServiceOption::NoInternetService,
        ]
    }

    pub fn next(self) -> Self {
        match self {
            ServiceOption::No => ServiceOption::Yes,
            ServiceOption::Yes => ServiceOption::NoInternetService,
            ServiceOption::NoInternetService => ServiceOption::No,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            ServiceOption::No => ServiceOption::NoInternetService,
            ServiceOption::Yes => ServiceOption::No,
            ServiceOption::NoInternetService => ServiceOption::Yes,
        }
    }
}

/// One customer in the reduced widget schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetRecord {
    pub tenure: f64,
    pub monthly_charges: f64,
    pub total_charges: f64,
    pub contract: Contract,
    pub internet_service: InternetService,
    pub online_security: ServiceOption,
    pub tech_support: ServiceOption,
}

impl WidgetRecord {
    /// Build the positional feature vector the widget model expects.
    ///
    /// Field order is fixed: tenure, MonthlyCharges, TotalCharges,
    /// Contract, InternetService, OnlineSecurity, TechSupport.
    pub fn to_vector(&self) -> [f32; 7] {
        [
            self.tenure as f32,
            self.monthly_charges as f32,
            self.total_charges as f32,
            f32::from(self.contract.code()),
            f32::from(self.internet_service.code()),
            f32::from(self.online_security.code()),
            f32::from(self.tech_support.code()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_codes() {
        assert_eq!(Contract::MonthToMonth.code(), 0);
        assert_eq!(Contract::OneYear.code(), 1);
        assert_eq!(Contract::TwoYear.code(), 2);
    }

    #[test]
    fn test_internet_service_codes() {
        assert_eq!(InternetService::No.code(), 0);
        assert_eq!(InternetService::Dsl.code(), 1);
        assert_eq!(InternetService::FiberOptic.code(), 2);
    }

    #[test]
    fn test_service_option_codes() {
        assert_eq!(ServiceOption::No.code(), 0);
        assert_eq!(ServiceOption::Yes.code(), 1);
        assert_eq!(ServiceOption::NoInternetService.code(), 2);
    }

    #[test]
    fn test_next_cycles_through_all_options() {
        let mut contract = Contract::MonthToMonth;
        for _ in 0..Contract::all().len() {
            contract = contract.next();
        }
        assert_eq!(contract, Contract::MonthToMonth);

        let mut service = ServiceOption::No;
        for _ in 0..ServiceOption::all().len() {
            service = service.next();
        }
        assert_eq!(service, ServiceOption::No);
    }

    #[test]
    fn test_previous_inverts_next() {
        for &c in Contract::all() {
            assert_eq!(c.next().previous(), c);
        }
        for &s in InternetService::all() {
            assert_eq!(s.next().previous(), s);
        }
        for &s in ServiceOption::all() {
            assert_eq!(s.next().previous(), s);
        }
    }

    #[test]
    fn test_vector_layout() {
        let record = WidgetRecord {
            tenure: 24.0,
            monthly_charges: 65.5,
            total_charges: 1572.0,
            contract: Contract::OneYear,
            internet_service: InternetService::FiberOptic,
            online_security: ServiceOption::Yes,
            tech_support: ServiceOption::NoInternetService,
        };
        assert_eq!(
            record.to_vector(),
            [24.0, 65.5, 1572.0, 1.0, 2.0, 1.0, 2.0]
        );
    }

    #[test]
    fn test_codes_independent_of_numeric_fields() {
        // The categorical tail of the vector is a pure function of the
        // dropdown selections, for every combination of the four.
        for &contract in Contract::all() {
            for &internet in InternetService::all() {
                for &security in ServiceOption::all() {
                    for &support in ServiceOption::all() {
                        let base = WidgetRecord {
                            tenure: 0.0,
                            monthly_charges: 0.0,
                            total_charges: 0.0,
                            contract,
                            internet_service: internet,
                            online_security: security,
                            tech_support: support,
                        };
                        let other = WidgetRecord {
                            tenure: 72.0,
                            monthly_charges: 118.75,
                            total_charges: 8684.8,
                            ..base.clone()
                        };
                        assert_eq!(base.to_vector()[3..], other.to_vector()[3..]);
                        assert_eq!(
                            base.to_vector()[3..],
                            [
                                f32::from(contract.code()),
                                f32::from(internet.code()),
                                f32::from(security.code()),
                                f32::from(support.code()),
                            ]
                        );
                    }
                }
            }
        }
    }
}
