pub mod avatar_face_estimator;
