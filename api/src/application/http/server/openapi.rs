use utoipa::OpenApi;

use crate::application::http::{
    analysis::router::AnalysisApiDoc, care_plan::router::CarePlanApiDoc,
    catalogue::router::CatalogueApiDoc, ingredients::router::IngredientsApiDoc,
    recipes::router::RecipesApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriGuard API",
        description = "Condition-aware food safety decision pipeline"
    ),
    tags(
        (name = "analysis", description = "Food risk analysis and scan history"),
        (name = "care-plan", description = "Personalized care-plan generation"),
        (name = "recipes", description = "Recipe generation from ingredient photos"),
        (name = "catalogue", description = "Clinical condition catalogue"),
        (name = "ingredients", description = "Ingredient guide and condition matching"),
    )
)]
struct RootApiDoc;

pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = RootApiDoc::openapi();
    doc.merge(AnalysisApiDoc::openapi());
    doc.merge(CarePlanApiDoc::openapi());
    doc.merge(RecipesApiDoc::openapi());
    doc.merge(CatalogueApiDoc::openapi());
    doc.merge(IngredientsApiDoc::openapi());
    doc
}
