pub use super::advice::Entity as Advice;
pub use super::business_ideas::Entity as BusinessIdeas;
pub use super::connection_requests::Entity as ConnectionRequests;
pub use super::investor_proposals::Entity as InvestorProposals;
pub use super::loan_offers::Entity as LoanOffers;
pub use super::queries::Entity as Queries;
pub use super::users::Entity as Users;
