mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod student_detail;
pub use student_detail::StudentDetailView;

mod delete_confirm;
pub use delete_confirm::DeleteConfirmView;
