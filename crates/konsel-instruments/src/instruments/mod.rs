pub mod srq29;
