pub use super::mwd_account::Entity as MwdAccount;
pub use super::mwd_answer_progress::Entity as MwdAnswerProgress;
pub use super::mwd_institute::Entity as MwdInstitute;
pub use super::mwd_institute_turn::Entity as MwdInstituteTurn;
pub use super::mwd_job::Entity as MwdJob;
pub use super::mwd_job_major_map::Entity as MwdJobMajorMap;
pub use super::mwd_major::Entity as MwdMajor;
pub use super::mwd_manager::Entity as MwdManager;
pub use super::mwd_manager_login_log::Entity as MwdManagerLoginLog;
pub use super::mwd_person::Entity as MwdPerson;
pub use super::mwd_question_attr::Entity as MwdQuestionAttr;
pub use super::mwd_question_explain::Entity as MwdQuestionExplain;
pub use super::mwd_resjob::Entity as MwdResjob;
pub use super::mwd_score1::Entity as MwdScore1;
