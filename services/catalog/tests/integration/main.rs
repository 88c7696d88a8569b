mod helpers;

mod author_test;
mod category_test;
mod promotion_test;
mod review_test;
mod seed_test;
